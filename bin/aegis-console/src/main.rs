//! Aegis Console Host
//!
//! Bootstraps the in-memory RBAC store from the seed catalogue, logs a
//! summary of the derived views, and dumps the state as JSON to
//! stdout. State is ephemeral: everything is lost when the process
//! ends.
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `RUST_LOG` | `info` | Log level filter |
//! | `LOG_FORMAT` | text | Set to `json` for JSON logs |

use anyhow::Result;
use tracing::info;

use aegis_core::permission::names;
use aegis_core::views::{active_user_count, category_counts, roles_referencing};
use aegis_core::{init_logging, RbacStore, SeedData};

fn main() -> Result<()> {
    init_logging();

    let seed = SeedData::load();
    seed.verify()?;
    let store = RbacStore::from_seed(seed);

    info!(
        active_users = active_user_count(store.users()),
        total_users = store.users().len(),
        "user summary"
    );

    for (category, count) in category_counts(store.permissions()) {
        info!(category = category.id(), count, "permission category");
    }

    let dashboard_roles = roles_referencing(store.roles(), names::VIEW_DASHBOARD);
    info!(
        permission = names::VIEW_DASHBOARD,
        roles = dashboard_roles.len(),
        "roles referencing"
    );

    println!("{}", store.snapshot().to_json()?);

    Ok(())
}
