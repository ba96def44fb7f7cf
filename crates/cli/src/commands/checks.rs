//! `xrinputctl checks`: list selectable checks.

use anyhow::Result;
use serde_json::json;
use xrinput_rules::Check;

use crate::output;

pub fn execute(json: bool) -> Result<()> {
    if json {
        let checks: Vec<_> = Check::ALL
            .iter()
            .map(|check| json!({ "name": check.as_str(), "description": check.description() }))
            .collect();
        return output::print_json(&json!({ "success": true, "checks": checks }));
    }
    for check in Check::ALL {
        println!("{:<22} {}", check.as_str(), check.description());
    }
    Ok(())
}
