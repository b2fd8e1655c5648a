//! Partition registry mapping corpus names to conversion pipelines.

#![allow(clippy::print_stdout)]

mod builtin;
pub mod partition;

pub use partition::{Modality, Partition, Step, Tool, ToolArg};

use crate::constants::ALL_PARTITIONS;

/// Ordered collection of the registered partitions.
///
/// The order is the order conversions run when `all` is requested, so
/// partitions that feed metadata into later ones (billboard before
/// chordify) come first.
#[derive(Debug, Clone)]
pub struct Registry {
    partitions: Vec<Partition>,
}

impl Registry {
    /// Built-in registry holding every supported partition.
    pub fn builtin() -> Self {
        Self {
            partitions: builtin::builtin_partitions(),
        }
    }

    /// Look up a partition by exact name.
    ///
    /// Names are case-sensitive. The `all` pseudo-partition is expanded by
    /// the caller and is not an entry here.
    pub fn lookup(&self, name: &str) -> Option<&Partition> {
        self.partitions.iter().find(|p| p.name == name)
    }

    /// Iterate partitions in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Partition> {
        self.partitions.iter()
    }

    /// Partition names in registry order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.partitions.iter().map(|p| p.name)
    }

    /// Number of registered partitions.
    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    /// Whether the registry has no partitions.
    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }
}

/// List every registered partition with its step count and pipeline shape.
pub fn list_partitions(registry: &Registry) {
    println!("Registered partitions:");
    println!();

    for partition in registry.iter() {
        let tools: Vec<String> = partition.steps.iter().map(|s| s.tool.to_string()).collect();
        println!(
            "  {:<22} {} step(s): {}",
            partition.name,
            partition.steps.len(),
            tools.join(" + ")
        );
    }

    println!();
    println!("Run 'chordbatch <partition>' to convert one, or 'chordbatch {ALL_PARTITIONS}'");
    println!("for everything; 'chordbatch show <partition>' prints the exact commands.");
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lookup_finds_registered_names() {
        let registry = Registry::builtin();
        assert!(registry.lookup("isophonics").is_some());
        assert!(registry.lookup("mozart-piano-sonatas").is_some());
        assert!(registry.lookup("not-a-partition").is_none());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let registry = Registry::builtin();
        assert!(registry.lookup("Isophonics").is_none());
        assert!(registry.lookup("ISOPHONICS").is_none());
    }

    #[test]
    fn all_is_not_a_registry_entry() {
        let registry = Registry::builtin();
        assert!(registry.lookup(ALL_PARTITIONS).is_none());
    }

    #[test]
    fn names_are_unique() {
        let registry = Registry::builtin();
        let names: Vec<&str> = registry.names().collect();
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn registry_order_is_stable() {
        let registry = Registry::builtin();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names.first(), Some(&"isophonics"));
        assert_eq!(names.get(2), Some(&"billboard"));
        assert_eq!(names.get(3), Some(&"chordify"));
        assert_eq!(names.last(), Some(&"mozart-piano-sonatas"));
        assert_eq!(registry.len(), 16);
    }
}
