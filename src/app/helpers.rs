use rand_core::{OsRng, TryRngCore};

use crate::app::App;
use crate::app::constants::GENERATED_DESCRIPTION;
use crate::model::HostRecord;

fn random_u32() -> u32 {
    let mut rng = OsRng;
    rng.try_next_u32().unwrap_or_else(|_| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|duration| duration.subsec_nanos())
            .unwrap_or(0)
    })
}

/// Synthetic entry for trying out the list without typing one in.
pub(crate) fn random_host() -> HostRecord {
    let seed = random_u32();
    let id = seed % 100;
    HostRecord {
        host: format!("host-{id}"),
        hostname: format!("10.0.{}.{}", (seed >> 8) % 256, (seed >> 16) % 254 + 1),
        user: format!("user{id}"),
        forward_agent: true,
        tags: Vec::new(),
        description: GENERATED_DESCRIPTION.to_string(),
    }
}

impl App {
    /// Appends the hosts whose alias is not in the list yet and returns how
    /// many were added.
    pub(crate) fn merge_imported(&mut self, found: Vec<HostRecord>) -> usize {
        let mut added = 0;
        for host in found {
            if self.hosts.contains(&host.host) {
                continue;
            }
            self.hosts.append(host);
            added += 1;
        }
        added
    }
}
