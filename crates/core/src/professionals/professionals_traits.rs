use crate::errors::Result;
use crate::professionals::professionals_model::Professional;

/// Read access to professional profiles.
pub trait ProfessionalRepositoryTrait: Send + Sync {
    /// Returns `Error::NotFound` when no profile has this id.
    fn get_professional(&self, professional_id: &str) -> Result<Professional>;
}
