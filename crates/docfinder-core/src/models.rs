mod criteria;
mod doctor;
mod view;

pub use criteria::{ALL_CONSULTATION_MODES, ConsultationMode, FilterCriteria, SortKey};
pub use doctor::{DoctorRecord, GENERAL_PHYSICIAN};
pub use view::{DoctorCard, SpecialityOption, sanitize_label};
