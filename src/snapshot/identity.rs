use sha1::{Digest, Sha1};

use super::snapshot_model::ElementSnapshot;

/// Content hash of a snapshot. Two snapshots extracted from equivalent
/// markup hash equal.
pub fn fingerprint(snapshot: &ElementSnapshot) -> String {
    let mut hasher = Sha1::new();
    feed(&mut hasher, snapshot);
    format!("{:x}", hasher.finalize())
}

/// Revision key for an on/off pair. Changes whenever either side changes,
/// including a side appearing or disappearing.
pub fn pair_revision(on: Option<&ElementSnapshot>, off: Option<&ElementSnapshot>) -> String {
    let mut hasher = Sha1::new();
    for (label, side) in [("on", on), ("off", off)] {
        hasher.update(label.as_bytes());
        match side {
            Some(s) => {
                hasher.update([1u8]);
                feed(&mut hasher, s);
            }
            None => hasher.update([0u8]),
        }
    }
    format!("{:x}", hasher.finalize())
}

fn feed(hasher: &mut Sha1, snapshot: &ElementSnapshot) {
    field(hasher, &snapshot.tag);
    for class in &snapshot.classes {
        field(hasher, class);
    }
    hasher.update([0xff]);
    for (name, value) in snapshot
        .data_attributes
        .iter()
        .chain(snapshot.aria_attributes.iter())
    {
        field(hasher, name);
        field(hasher, value);
    }
}

// Length-prefixed so ("ab","c") and ("a","bc") differ
fn field(hasher: &mut Sha1, value: &str) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}
