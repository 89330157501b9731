//! AlgoBench binary entry point.
//!
//! Exit behavior: 0 when the pass completes, even if individual
//! workloads failed (they are reported inline); non-zero only for
//! setup errors such as an empty registry or invalid configuration.

fn main() -> anyhow::Result<()> {
    algobench::run()
}
