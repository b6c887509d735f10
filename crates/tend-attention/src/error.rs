use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AttentionError {
    #[error("failed to fetch caseload for practitioner {practitioner_id}: {reason}")]
    CaseloadFetch {
        practitioner_id: Uuid,
        reason: String,
    },
}
