// src/constants.rs
//
// Application-wide constants extracted from magic numbers throughout the codebase.
// Each constant is documented with its purpose and usage context.

/// Minimum title length (in characters) before a draft can be saved.
///
/// A shorter title does not produce an error message, it only keeps the
/// form's save control disabled.
///
/// Used in: `domain/form.rs`
pub const TITLE_MIN_CHARS: usize = 3;

/// Maximum title length in characters.
///
/// Used in: `domain/form.rs`
pub const TITLE_MAX_CHARS: usize = 100;

/// Minimum content length (in characters) before a draft can be saved.
///
/// Used in: `domain/form.rs`
pub const CONTENT_MIN_CHARS: usize = 10;

/// Maximum content length in characters.
///
/// Used in: `domain/form.rs`
pub const CONTENT_MAX_CHARS: usize = 1000;

/// Size ceiling for image attachments, in bytes (2 MiB).
///
/// Used in: `domain/attachment.rs`
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

/// Delay in milliseconds after writing the HTML detail page before opening
/// the browser.
///
/// On macOS, the browser needs a brief moment for the file to be fully written
/// and indexed before opening. Without this delay, the browser may open an empty
/// or incomplete file.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 200;
