/*! Integration tests for datapath.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - accessor: Tests for the path-addressed point operations (has/get/set/remove)
 * - walk: Tests for the depth-first walker and its pruning contract
 * - transform: Tests for flatten/hierarchize/clone/ensure/filter
 * - schema: Tests for schema validation and its aggregate error
 * - json: Tests for JSON interchange through the accessor surface
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("datapath=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod accessor;
mod helpers;
mod json;
mod transform;
mod walk;
