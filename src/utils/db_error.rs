use crate::domain::repositories::StoreError;
use mongodb::error::{Error, ErrorKind, WriteFailure};

/// MongoDB server error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

pub fn is_duplicate_key(e: &Error) -> bool {
    match e.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}

/// Maps a driver error on a write of `short_link` to a [`StoreError`].
pub fn map_write_error(e: Error, short_link: &str) -> StoreError {
    if is_duplicate_key(&e) {
        return StoreError::DuplicateKey(short_link.to_string());
    }

    StoreError::Backend(e.to_string())
}
