//! Loading and saving departments on disk.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::department::Department;
use crate::error::{DepartmentError, DepartmentResult};

use super::codec::{decode, encode};

/// Reads a department from a UTF-8 text file.
///
/// The returned department is built from scratch; a failed load never
/// yields a partially populated department.
///
/// # Errors
///
/// Returns `FileRead` if the file cannot be read, or any of the format
/// errors described on [`decode`].
pub fn load_department<P: AsRef<Path>>(path: P) -> DepartmentResult<Department> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|e| DepartmentError::FileRead {
        path: path_str.clone(),
        message: e.to_string(),
    })?;

    match decode(&content) {
        Ok(department) => {
            info!(path = %path_str, records = department.len(), "Loaded work types");
            Ok(department)
        }
        Err(err) => {
            warn!(path = %path_str, error = %err, "Rejected work type file");
            Err(err)
        }
    }
}

/// Loads `path` and replaces `department` with the result.
///
/// The swap happens only after the whole file has been accepted; on any
/// error `department` keeps its previous contents. Returns the number of
/// work types loaded.
///
/// # Example
///
/// ```no_run
/// use salary_department::department::Department;
/// use salary_department::storage::load_into;
///
/// let mut department = Department::new();
/// let count = load_into(&mut department, "salary_data.txt")?;
/// println!("Loaded {} work types", count);
/// # Ok::<(), salary_department::error::DepartmentError>(())
/// ```
pub fn load_into<P: AsRef<Path>>(department: &mut Department, path: P) -> DepartmentResult<usize> {
    let loaded = load_department(path)?;
    let count = loaded.len();
    *department = loaded;
    Ok(count)
}

/// Writes the department to `path`, overwriting any existing file.
///
/// Values are rounded to whole numbers as described on
/// [`encode`](super::encode); a fractional value that rounds out of range
/// saves to a file that will not load back.
///
/// # Errors
///
/// Returns `FileWrite` if the file cannot be written.
pub fn save_department<P: AsRef<Path>>(department: &Department, path: P) -> DepartmentResult<()> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    fs::write(path, encode(department)).map_err(|e| DepartmentError::FileWrite {
        path: path_str.clone(),
        message: e.to_string(),
    })?;

    info!(path = %path_str, records = department.len(), "Saved work types");
    Ok(())
}
