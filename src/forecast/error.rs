use super::model::Revision;

/// 예측 데이터 테이블 조회/검증 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ForecastError {
    /// 해당 리비전에 시나리오가 없는 식별자를 조회한 경우이다.
    #[error("리비전 {revision}에 '{view}' 시나리오가 없습니다.")]
    NotFound { revision: Revision, view: String },
    /// 열거된 탭 식별자가 아닌 문자열이다.
    #[error("알 수 없는 탭 식별자입니다: {0}")]
    UnknownView(String),
    /// 열거된 리비전 식별자가 아닌 문자열이다.
    #[error("알 수 없는 데이터셋 리비전입니다: {0}")]
    UnknownRevision(String),
    /// 저작된 수치가 합계 불변식을 만족하지 않는 경우이다.
    #[error("리비전 {revision} 검증 실패 ({check}): 기대값 {expected}, 실제값 {actual}")]
    Inconsistent {
        revision: Revision,
        check: String,
        expected: String,
        actual: String,
    },
}
