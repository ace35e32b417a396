// ABOUTME: Onboarding wizard core
// Linear three-step state machine over form, selection and upload state

pub mod fields;
pub mod selection;
pub mod session;
pub mod step;
pub mod uploads;

pub use fields::{FieldKey, FormFieldStore};
pub use selection::SelectionSet;
pub use session::{AdvanceOutcome, RetreatOutcome, WizardSession};
pub use step::{WizardStep, COLOR_OPTIONS, STYLE_OPTIONS};
pub use uploads::DraftUploadQueue;
