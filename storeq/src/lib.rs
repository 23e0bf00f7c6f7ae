//! Typed query descriptors for the hosted PostgREST-style store.
//!
//! This crate owns the table schema of the remote store and the builder that
//! turns a read request into a request path plus query string. Nested child
//! embeds are validated against the schema at construction time, so a typo or
//! an illegal relationship is a [`QueryError`] rather than a malformed URL
//! discovered in the browser console.
//!
//! The descriptor deliberately models only what the application reads: `*`
//! column selection with optional child embeds, equality filters, multi-key
//! ordering, and a single-row mode. There is no write surface.

use std::fmt;

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

/// Error returned by [`Select`] construction.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The requested child table is not an embeddable relation of the parent.
    #[error("table {parent} has no embeddable relation {child}")]
    InvalidEmbed {
        /// Table the select reads from.
        parent: Table,
        /// Child table that was requested as a nested embed.
        child: Table,
    },
}

/// The tables exposed by the remote store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Table {
    ItemBases,
    ItemTypes,
    ItemSubtypes,
    ItemAffixes,
    ItemStats,
    ItemRequirements,
    ItemVariants,
    ItemMods,
    ModPools,
    CraftingMethods,
}

impl Table {
    /// Wire name of the table as it appears in request paths.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ItemBases => "item_bases",
            Self::ItemTypes => "item_types",
            Self::ItemSubtypes => "item_subtypes",
            Self::ItemAffixes => "item_affixes",
            Self::ItemStats => "item_stats",
            Self::ItemRequirements => "item_requirements",
            Self::ItemVariants => "item_variants",
            Self::ItemMods => "item_mods",
            Self::ModPools => "mod_pools",
            Self::CraftingMethods => "crafting_methods",
        }
    }

    /// Child tables the store can embed as nested rows of this table.
    #[must_use]
    pub fn embeds(self) -> &'static [Table] {
        match self {
            Self::ItemBases => &[
                Table::ItemStats,
                Table::ItemRequirements,
                Table::ItemVariants,
                Table::ItemMods,
            ],
            Self::ItemTypes => &[Table::ItemSubtypes],
            Self::ModPools => &[Table::ItemMods],
            _ => &[],
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sort direction for an order key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    fn suffix(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A read descriptor: one table, optional child embeds, equality filters,
/// order keys, and an optional single-row mode.
#[derive(Clone, Debug)]
pub struct Select {
    table: Table,
    embeds: Vec<Table>,
    filters: Vec<(String, String)>,
    orders: Vec<(String, Direction)>,
    single: bool,
}

impl Select {
    /// Start a descriptor reading all columns of `table`.
    #[must_use]
    pub fn from(table: Table) -> Self {
        Self {
            table,
            embeds: Vec::new(),
            filters: Vec::new(),
            orders: Vec::new(),
            single: false,
        }
    }

    /// Embed all columns of a related child table in each returned row.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidEmbed`] when `child` is not an embeddable
    /// relation of this descriptor's table.
    pub fn embed(mut self, child: Table) -> Result<Self, QueryError> {
        if !self.table.embeds().contains(&child) {
            return Err(QueryError::InvalidEmbed {
                parent: self.table,
                child,
            });
        }
        self.embeds.push(child);
        Ok(self)
    }

    /// Keep only rows where `column` equals `value`.
    #[must_use]
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters.push((column.to_owned(), value.to_owned()));
        self
    }

    /// Add an order key. Keys apply in call order.
    #[must_use]
    pub fn order(mut self, column: &str, direction: Direction) -> Self {
        self.orders.push((column.to_owned(), direction));
        self
    }

    /// Request exactly one row. The store rejects the request when zero or
    /// more than one row matches, which the caller surfaces as "not found".
    #[must_use]
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    /// Whether this descriptor is in single-row mode.
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.single
    }

    /// Table this descriptor reads from.
    #[must_use]
    pub fn table(&self) -> Table {
        self.table
    }

    /// Request path for this descriptor, e.g. `/rest/v1/item_bases`.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/rest/v1/{}", self.table.name())
    }

    /// Render the descriptor as a PostgREST query string (no leading `?`).
    ///
    /// The select list is always `*` plus any embeds as `child(*)`. Filter
    /// values are percent-encoded; column names are schema-controlled and
    /// rendered verbatim.
    #[must_use]
    pub fn query_string(&self) -> String {
        let mut select_list = String::from("*");
        for child in &self.embeds {
            select_list.push_str(&format!(",{}(*)", child.name()));
        }

        let mut parts = vec![format!("select={select_list}")];
        for (column, value) in &self.filters {
            parts.push(format!("{column}=eq.{}", urlencoding::encode(value)));
        }
        if !self.orders.is_empty() {
            let keys: Vec<String> = self
                .orders
                .iter()
                .map(|(column, direction)| format!("{column}.{}", direction.suffix()))
                .collect();
            parts.push(format!("order={}", keys.join(",")));
        }
        parts.join("&")
    }
}
