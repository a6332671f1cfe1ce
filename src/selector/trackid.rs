use crate::snapshot::snapshot_model::DataKeyForm;

/// Whether the reserved trackid data key is among `keys`. When it is, the
/// element already carries a tracking identifier and no selector needs to be
/// picked.
pub fn has_trackid<'a>(keys: impl IntoIterator<Item = &'a String>, key_form: DataKeyForm) -> bool {
    let wanted = key_form.trackid_key();
    keys.into_iter().any(|k| k == wanted)
}
