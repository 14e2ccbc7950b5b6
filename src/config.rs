use std::path::{Path, PathBuf};

/// Pinned Checkstyle release downloaded on first use.
pub const CHECKSTYLE_URL: &str = "https://nchc.dl.sourceforge.net/project/checkstyle/checkstyle/7.6.1/checkstyle-7.6.1-all.jar";

/// Rule set bundled inside the Checkstyle jar.
pub const CHECKSTYLE_RULES: &str = "/google_checks.xml";

/// One source tree to check and where its XML report goes.
#[derive(Debug, Clone)]
pub struct Project {
    pub source_dir: PathBuf,
    pub report_path: PathBuf,
}

/// Paths and constants shared by all steps of one run.
///
/// Everything is carried by value so tests can point the runner at temporary
/// directories and a local download URL instead of the real layout.
#[derive(Debug, Clone)]
pub struct Config {
    pub temp_dir: PathBuf,
    pub artifact_path: PathBuf,
    pub artifact_url: String,
    pub rules: String,
    /// Checked strictly in order; a failure stops the rest.
    pub projects: Vec<Project>,
}

impl Config {
    /// Conventional layout rooted at `root` (normally the invocation
    /// directory): `.helper/` for temporary files, wave and pst as the two
    /// checked trees.
    pub fn at(root: &Path) -> Self {
        let temp_dir = root.join(".helper");
        Config {
            artifact_path: temp_dir.join("checkstyle.jar"),
            artifact_url: CHECKSTYLE_URL.to_string(),
            rules: CHECKSTYLE_RULES.to_string(),
            projects: vec![
                Project {
                    source_dir: root.join("wave/src/main/java"),
                    report_path: temp_dir.join("wave.style.xml"),
                },
                Project {
                    source_dir: root.join("pst/src/main/java"),
                    report_path: temp_dir.join("pst.style.xml"),
                },
            ],
            temp_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conventional_layout_lives_under_helper_dir() {
        let cfg = Config::at(Path::new("/work"));
        assert_eq!(cfg.temp_dir, Path::new("/work/.helper"));
        assert_eq!(cfg.artifact_path, Path::new("/work/.helper/checkstyle.jar"));
        assert!(cfg.artifact_url.contains("7.6.1"));
    }

    #[test]
    fn projects_are_wave_then_pst() {
        let cfg = Config::at(Path::new("/work"));
        assert_eq!(cfg.projects.len(), 2);
        assert_eq!(
            cfg.projects[0].source_dir,
            Path::new("/work/wave/src/main/java")
        );
        assert_eq!(
            cfg.projects[0].report_path,
            Path::new("/work/.helper/wave.style.xml")
        );
        assert_eq!(
            cfg.projects[1].source_dir,
            Path::new("/work/pst/src/main/java")
        );
        assert_eq!(
            cfg.projects[1].report_path,
            Path::new("/work/.helper/pst.style.xml")
        );
    }
}
