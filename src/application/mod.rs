pub mod coordinator;

pub use coordinator::{
    PresentationCoordinator, initialize_global_presentation, navigate, slide_became_visible,
    with_presentation, with_presentation_mut,
};
