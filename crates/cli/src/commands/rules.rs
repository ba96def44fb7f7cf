//! `xrinputctl rules`: print the fixed rule tables.

use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use xrinput_rules::{COMMON_USAGES, ImplicationRuleSet, ROLE_REQUIREMENTS};

use crate::output;

pub fn execute(json: bool, vocabulary: bool) -> Result<()> {
    let rules = ImplicationRuleSet::standard();
    if json {
        let implications: Vec<_> = rules
            .rules()
            .iter()
            .map(|rule| {
                json!({
                    "id": rule.id,
                    "check": rule.check.as_str(),
                    "description": rule.description,
                })
            })
            .collect();
        let roles: Vec<_> = ROLE_REQUIREMENTS
            .iter()
            .map(|entry| json!({ "role": entry.role, "required": entry.required }))
            .collect();
        let mut body = json!({
            "success": true,
            "implications": implications,
            "roles": roles,
        });
        if vocabulary {
            body["vocabulary"] = COMMON_USAGES
                .iter()
                .map(|(name, ty)| json!({ "name": name, "type": ty }))
                .collect();
        }
        return output::print_json(&body);
    }

    println!("{}", "Implication rules:".bold());
    for rule in rules.rules() {
        println!("  {} [{}]", rule.id, rule.check);
        println!("    {}", rule.description.dimmed());
    }
    println!("{}", "Role requirements:".bold());
    for entry in ROLE_REQUIREMENTS {
        println!("  {}: {}", entry.role, entry.required.join(", "));
    }
    if vocabulary {
        println!("{}", "Common feature usages:".bold());
        for (name, ty) in COMMON_USAGES {
            println!("  {name}: {ty}");
        }
    }
    Ok(())
}
