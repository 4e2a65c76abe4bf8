use crate::artifacts::entry::{Entry, SideFacts, SizeState, TimeState};
use anyhow::Context;
use chrono::{DateTime, Local};
use derive_new::new;
use sha1::{Digest, Sha1};
use std::fs::Metadata;
use std::io::Read;
use std::path::{Path, PathBuf};

const CHECKSUM_BUFFER_SIZE: usize = 64 * 1024;

/// What was found on disk for one side of a path
#[derive(Debug, Default)]
struct Probe {
    path: PathBuf,
    present: bool,
    size: u64,
    mod_time: Option<DateTime<Local>>,
    checksum: Option<String>,
}

/// Compares one relative path across both roots
#[derive(Debug, new)]
pub struct Inspector<'r> {
    left_root: &'r Path,
    right_root: &'r Path,
    with_checksum: bool,
}

impl<'r> Inspector<'r> {
    pub fn inspect(&self, norm_path: &str) -> Entry {
        let is_dir = norm_path.ends_with('/');

        let left = self.probe(self.left_root, norm_path, is_dir);
        let right = self.probe(self.right_root, norm_path, is_dir);

        let mut left_facts = Self::facts_of(&left);
        let mut right_facts = Self::facts_of(&right);

        left_facts.is_orphan = left.present && !right.present;
        right_facts.is_orphan = right.present && !left.present;

        if !is_dir {
            if left.present {
                left_facts.size_state = SizeState::compare(left.size, right.size);
                left_facts.time_state = TimeState::compare(left.mod_time, right.mod_time);
            }
            if right.present {
                right_facts.size_state = SizeState::compare(right.size, left.size);
                right_facts.time_state = TimeState::compare(right.mod_time, left.mod_time);
            }
        }

        let entry = Entry::new(norm_path, left_facts, right_facts);
        tracing::trace!(
            path = norm_path,
            left_missing = entry.left.is_missing,
            right_missing = entry.right.is_missing,
            "inspected entry"
        );

        entry
    }

    fn facts_of(probe: &Probe) -> SideFacts {
        SideFacts::new(
            probe.path.clone(),
            probe.size,
            probe.mod_time,
            probe.checksum.clone(),
            !probe.present,
            false,
            SizeState::SameSize,
            TimeState::SameTime,
        )
    }

    fn probe(&self, root: &Path, norm_path: &str, is_dir: bool) -> Probe {
        let path = root.join(norm_path);

        // a kind mismatch (file on one side, directory on the other) counts as missing
        let metadata = match std::fs::metadata(&path) {
            Ok(metadata) if metadata.is_dir() == is_dir => metadata,
            _ => {
                return Probe {
                    path,
                    ..Default::default()
                };
            }
        };

        if is_dir {
            return Probe {
                path,
                present: true,
                ..Default::default()
            };
        }

        let checksum = if self.with_checksum {
            match file_checksum(&path) {
                Ok(checksum) => Some(checksum),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to checksum file");
                    None
                }
            }
        } else {
            None
        };

        Probe {
            size: metadata.len(),
            mod_time: modification_time(&metadata),
            checksum,
            present: true,
            path,
        }
    }
}

fn modification_time(metadata: &Metadata) -> Option<DateTime<Local>> {
    metadata.modified().ok().map(DateTime::<Local>::from)
}

/// Hex encoded SHA-1 of a file's content
pub fn file_checksum(path: &Path) -> anyhow::Result<String> {
    let mut file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open file: {:?}", path))?;

    let mut digest = Sha1::new();
    let mut buffer = vec![0u8; CHECKSUM_BUFFER_SIZE];
    loop {
        let n = file
            .read(&mut buffer)
            .with_context(|| format!("Failed to read file: {:?}", path))?;
        if n == 0 {
            break;
        }
        digest.update(&buffer[..n]);
    }

    Ok(format!("{:x}", digest.finalize()))
}
