//! S3 key/path conventions.
//!
//! Pure string functions, no AWS SDK dependency. These define the canonical
//! layout of waiver attachments in the Inkform bucket. The waiver id is the
//! join key between this namespace and the database record.

pub const WAIVERS_PREFIX: &str = "waivers/";

pub fn signature(waiver_id: &str) -> String {
    format!("waivers/{waiver_id}/signature.png")
}

pub fn id_photo_front(waiver_id: &str, ext: &str) -> String {
    format!("waivers/{waiver_id}/id_front.{ext}")
}

pub fn waiver_prefix(waiver_id: &str) -> String {
    format!("waivers/{waiver_id}/")
}
