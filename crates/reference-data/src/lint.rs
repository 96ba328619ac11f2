//! Consistency checks over loaded reference tables.
//!
//! Nothing here is fatal: the selection engine tolerates every issue
//! reported below, but a reported issue usually means a broken link or a
//! missing row on a rendered page.

use std::collections::HashSet;
use std::fmt;

use crate::address::validate_address;
use crate::environment::Environment;
use crate::registry::{Registry, Table, Tables};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintIssue {
    /// A contract references a chain missing from the EVM chain table.
    UnresolvedContractChain { asset: String, chain: String },
    /// An EVM address is malformed.
    MalformedAddress { owner: String, chain: String, reason: String },
    /// A mixed-case EVM address fails its EIP-55 checksum.
    BadChecksum { owner: String, chain: String, address: String },
    /// An identifier appears more than once in one table.
    DuplicateId { table: Table, id: String },
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintIssue::UnresolvedContractChain { asset, chain } => {
                write!(f, "{asset}: contract on unknown chain {chain}")
            }
            LintIssue::MalformedAddress { owner, chain, reason } => {
                write!(f, "{owner} on {chain}: {reason}")
            }
            LintIssue::BadChecksum { owner, chain, address } => {
                write!(f, "{owner} on {chain}: bad checksum {address}")
            }
            LintIssue::DuplicateId { table, id } => write!(f, "{table}: duplicate id {id}"),
        }
    }
}

/// Lints every environment of the registry.
pub fn lint_registry(registry: &Registry) -> Vec<(Environment, LintIssue)> {
    Environment::ALL
        .into_iter()
        .flat_map(|env| {
            lint_tables(registry.tables(env))
                .into_iter()
                .map(move |issue| (env, issue))
        })
        .collect()
}

/// Lints the tables of one environment.
pub fn lint_tables(tables: &Tables) -> Vec<LintIssue> {
    let mut issues = Vec::new();

    duplicates(Table::EvmChains, tables.evm_chains.iter().map(|c| c.id.as_str()), &mut issues);
    duplicates(Table::CosmosChains, tables.cosmos_chains.iter().map(|c| c.id.as_str()), &mut issues);
    duplicates(Table::EvmAssets, tables.evm_assets.iter().map(|a| a.id.as_str()), &mut issues);
    duplicates(Table::IbcAssets, tables.ibc_assets.iter().map(|a| a.id.as_str()), &mut issues);

    for asset in &tables.evm_assets {
        for contract in &asset.contracts {
            if !tables.is_evm_chain(&contract.chain) {
                issues.push(LintIssue::UnresolvedContractChain {
                    asset: asset.id.clone(),
                    chain: contract.chain.clone(),
                });
            }
            check_address(&asset.id, &contract.chain, &contract.address, &mut issues);
        }
    }

    for (role, bindings) in [("gateway", &tables.gateways), ("gas service", &tables.gas_services)] {
        for binding in bindings {
            check_address(role, &binding.id, &binding.address, &mut issues);
        }
    }

    issues
}

fn duplicates<'a>(
    table: Table,
    ids: impl Iterator<Item = &'a str>,
    issues: &mut Vec<LintIssue>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            issues.push(LintIssue::DuplicateId { table, id: id.to_string() });
        }
    }
}

fn check_address(owner: &str, chain: &str, address: &str, issues: &mut Vec<LintIssue>) {
    match validate_address(address) {
        Ok(true) => {}
        Ok(false) => issues.push(LintIssue::BadChecksum {
            owner: owner.to_string(),
            chain: chain.to_string(),
            address: address.to_string(),
        }),
        Err(e) => issues.push(LintIssue::MalformedAddress {
            owner: owner.to_string(),
            chain: chain.to_string(),
            reason: e.to_string(),
        }),
    }
}
