pub mod errors;
pub mod operations;
pub mod traits;

pub use errors::ProcessError;
pub use operations::{
    FALLBACK_LETTER, SystemProcessResolver, extract_base_name, first_letter,
    get_executable_name,
};
pub use traits::ProcessNameResolver;
