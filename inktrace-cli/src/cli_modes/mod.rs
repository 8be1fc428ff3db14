mod clear_mode;
mod cloud_mode;
mod confirm;
mod delete_mode;
mod edit_mode;
mod editor_utils;
mod read_mode;
mod use_color;
mod write_mode;

pub use clear_mode::clear_mode;
pub use cloud_mode::cloud_mode;
pub use delete_mode::delete_mode;
pub use edit_mode::edit_mode;
pub use read_mode::read_mode;
pub use use_color::use_color;
pub use write_mode::write_mode;

use inktrace_core::StoreError;

pub fn describe_store_error(error: &StoreError) -> String {
    match error {
        StoreError::Read { path, error } => {
            format!("could not read '{}': {}", path.display(), error)
        }
        StoreError::Parse { path, error } => {
            format!("'{}' is not a valid entries blob: {}", path.display(), error)
        }
        StoreError::Write { path, error } => {
            format!("could not write '{}': {}", path.display(), error)
        }
    }
}
