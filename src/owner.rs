//! # Owner Resolution
//!
//! Turns the numeric owner of a repository directory into a display string.
//!
//! The lookup itself sits behind the [`UserDatabase`] trait so tests can
//! supply users without touching the system password database. In the
//! application [`SystemUserDatabase`] is used, which asks the C library via
//! `getpwuid_r`.

use crate::error::{Error, Result};

/// The parts of a user database entry that matter for ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntry {
    /// Login name.
    pub name: String,
    /// The GECOS field: full name, optionally followed by `,`-separated
    /// contact details.
    pub gecos: Option<String>,
}

/// Trait for user lookups - allows mocking in tests
pub trait UserDatabase {
    /// Look up the user with id `uid`.
    ///
    /// Returns `Ok(None)` when no such user exists.
    fn lookup(&self, uid: u32) -> Result<Option<UserEntry>>;
}

/// Display string for a user: the full name up to the first comma, or the
/// login name when there is no full name.
pub fn display_name(entry: &UserEntry) -> String {
    let full_name = entry
        .gecos
        .as_deref()
        .map(|gecos| gecos.split(',').next().unwrap_or_default())
        .filter(|name| !name.is_empty());
    full_name.unwrap_or(&entry.name).to_string()
}

/// Resolve `uid` to an owner display string.
pub fn resolve(db: &dyn UserDatabase, uid: u32) -> Result<String> {
    match db.lookup(uid)? {
        Some(entry) => Ok(display_name(&entry)),
        None => Err(Error::OwnerLookup {
            uid,
            message: "no such user".to_string(),
        }),
    }
}

/// User database backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUserDatabase;

#[cfg(unix)]
impl UserDatabase for SystemUserDatabase {
    fn lookup(&self, uid: u32) -> Result<Option<UserEntry>> {
        use std::ffi::CStr;

        const MAX_BUFFER: usize = 1 << 20;
        let mut buffer: Vec<libc::c_char> = vec![0; 1024];

        loop {
            // SAFETY: `passwd` is plain old data; getpwuid_r fills it in and
            // points its strings into `buffer`, which outlives every read
            // below.
            let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
            let mut result: *mut libc::passwd = std::ptr::null_mut();
            let rc = unsafe {
                libc::getpwuid_r(
                    uid as libc::uid_t,
                    &mut pwd,
                    buffer.as_mut_ptr(),
                    buffer.len(),
                    &mut result,
                )
            };

            if rc == libc::ERANGE && buffer.len() < MAX_BUFFER {
                let grown = buffer.len() * 2;
                buffer.resize(grown, 0);
                continue;
            }
            if rc != 0 {
                return Err(Error::OwnerLookup {
                    uid,
                    message: std::io::Error::from_raw_os_error(rc).to_string(),
                });
            }
            if result.is_null() {
                return Ok(None);
            }

            let name = unsafe { CStr::from_ptr(pwd.pw_name) }
                .to_string_lossy()
                .into_owned();
            let gecos = if pwd.pw_gecos.is_null() {
                None
            } else {
                Some(
                    unsafe { CStr::from_ptr(pwd.pw_gecos) }
                        .to_string_lossy()
                        .into_owned(),
                )
            };
            return Ok(Some(UserEntry { name, gecos }));
        }
    }
}

#[cfg(not(unix))]
impl UserDatabase for SystemUserDatabase {
    fn lookup(&self, uid: u32) -> Result<Option<UserEntry>> {
        Err(Error::OwnerLookup {
            uid,
            message: "user lookup is not supported on this platform".to_string(),
        })
    }
}
