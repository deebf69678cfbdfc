//! Portfolio page furniture around the arcade: contact form, toasts,
//! the flowing-cube banner, and the footer.

pub mod backdrop;
pub mod contact;
pub mod footer;
pub mod notifications;

pub use backdrop::{create_flowing_cubes, CubeFace, FlowingCube, CUBE_COUNT};
pub use contact::{ContactError, ContactField, ContactForm, Submission};
pub use notifications::{Toast, ToastKind, Toasts};
