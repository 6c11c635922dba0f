use crate::forecast::Revision;
use anyhow::Context;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// 설정 파일 경로를 지정하는 환경 변수 이름이다.
pub const CONFIG_ENV: &str = "DAU_DASHBOARD_CONFIG";

/// 대시보드 실행 설정. 파일이 없으면 기본값을 사용한다.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// 처음 표시할 데이터셋 리비전.
    pub revision: Revision,
    /// 헤더에 리비전 전환 콤보박스를 노출할지 여부.
    pub show_revision_switch: bool,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            revision: Revision::default(),
            show_revision_switch: true,
            window: WindowConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 820.0,
        }
    }
}

impl DashboardConfig {
    /// CLI 첫 인자 또는 환경 변수에서 경로를 찾아 설정을 읽는다. 실패 시 기본값을 쓴다.
    pub fn resolve() -> Self {
        let Some(path) = config_path(std::env::args().nth(1), std::env::var_os(CONFIG_ENV)) else {
            tracing::info!("설정 파일이 지정되지 않아 기본 설정을 사용합니다.");
            return Self::default();
        };
        match load_config_from_file(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), revision = %config.revision, "설정 파일 로드 완료");
                config
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), "설정 파일을 읽지 못해 기본 설정을 사용합니다: {err:#}");
                Self::default()
            }
        }
    }
}

/// CLI 인자가 환경 변수보다 우선한다.
fn config_path(arg: Option<String>, env: Option<std::ffi::OsString>) -> Option<PathBuf> {
    arg.map(PathBuf::from).or_else(|| env.map(PathBuf::from))
}

/// YAML 설정 파일을 읽어 DashboardConfig로 파싱한다.
pub fn load_config_from_file(path: &Path) -> anyhow::Result<DashboardConfig> {
    let mut file =
        File::open(path).with_context(|| format!("설정 파일 열기 실패: {}", path.display()))?;
    load_config_from_reader(&mut file)
}

/// Reader에서 YAML을 읽어 DashboardConfig로 파싱한다.
pub fn load_config_from_reader<R: Read>(reader: &mut R) -> anyhow::Result<DashboardConfig> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    if buf.trim().is_empty() {
        return Ok(DashboardConfig::default());
    }
    let config: DashboardConfig =
        serde_yaml::from_str(&buf).context("설정 YAML 파싱 실패")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = load_config_from_reader(&mut "".as_bytes()).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.revision, Revision::B);
        assert!(config.show_revision_switch);
    }

    #[test]
    fn partial_document_keeps_remaining_defaults() {
        let yaml = "revision: a\nwindow:\n  width: 1440\n";
        let config = load_config_from_reader(&mut yaml.as_bytes()).unwrap();
        assert_eq!(config.revision, Revision::A);
        assert_eq!(config.window.width, 1440.0);
        assert_eq!(config.window.height, 820.0);
        assert!(config.show_revision_switch);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let yaml = "revision: b\nactive_tab: base\n";
        assert!(load_config_from_reader(&mut yaml.as_bytes()).is_err());
    }

    #[test]
    fn unknown_revision_is_rejected() {
        let yaml = "revision: c\n";
        assert!(load_config_from_reader(&mut yaml.as_bytes()).is_err());
    }

    #[test]
    fn bundled_example_config_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("dashboard.example.yaml");
        let config = load_config_from_file(&path).unwrap();
        assert_eq!(config.revision, Revision::B);
        assert_eq!(config.window.width, 1280.0);
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_config_from_file(Path::new("/nonexistent/dashboard.yaml")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/dashboard.yaml"));
    }

    #[test]
    fn cli_argument_wins_over_environment() {
        let path = config_path(Some("cli.yaml".into()), Some("env.yaml".into()));
        assert_eq!(path, Some(PathBuf::from("cli.yaml")));
        let path = config_path(None, Some("env.yaml".into()));
        assert_eq!(path, Some(PathBuf::from("env.yaml")));
        assert_eq!(config_path(None, None), None);
    }
}
