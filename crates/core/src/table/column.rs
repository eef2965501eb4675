//! Column descriptors

use std::sync::Arc;

use trackboard_domain::FieldAccess;

/// How a column extracts its cell value from a record.
///
/// `Field` binds to a named record field and may participate in sorting;
/// `Derived` runs an arbitrary closure at render time and never sorts.
#[derive(Clone)]
pub enum Accessor<T> {
    Field(&'static str),
    Derived(Arc<dyn Fn(&T) -> String + Send + Sync>),
}

/// One column of a table view.
#[derive(Clone)]
pub struct Column<T> {
    header: String,
    accessor: Accessor<T>,
    sortable: bool,
}

impl<T: FieldAccess> Column<T> {
    /// Column bound to a named record field.
    pub fn field(header: impl Into<String>, name: &'static str) -> Self {
        Self { header: header.into(), accessor: Accessor::Field(name), sortable: false }
    }

    /// Column computed from the whole record. Derived columns cannot sort.
    pub fn derived(
        header: impl Into<String>,
        derive: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self { header: header.into(), accessor: Accessor::Derived(Arc::new(derive)), sortable: false }
    }

    /// Mark the column sortable. Only field-bound columns can sort; the flag
    /// has no effect on derived columns.
    pub fn sortable(mut self) -> Self {
        if matches!(self.accessor, Accessor::Field(_)) {
            self.sortable = true;
        }
        self
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// The field name this column sorts by, when sortable.
    pub fn sort_key(&self) -> Option<&'static str> {
        match self.accessor {
            Accessor::Field(name) if self.sortable => Some(name),
            _ => None,
        }
    }

    /// Render this column's cell for one record.
    pub fn cell(&self, record: &T) -> String {
        match &self.accessor {
            Accessor::Field(name) => record.field(name).display(),
            Accessor::Derived(derive) => derive(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use trackboard_domain::types::User;

    use super::*;

    #[test]
    fn derived_columns_ignore_sortable() {
        let column: Column<User> = Column::derived("Name", |user: &User| user.name.clone()).sortable();
        assert!(!column.is_sortable());
        assert!(column.sort_key().is_none());
    }

    #[test]
    fn field_columns_opt_into_sorting() {
        let column: Column<User> = Column::field("Name", "name").sortable();
        assert_eq!(column.sort_key(), Some("name"));
    }

    #[test]
    fn cell_renders_through_field_access() {
        let user = User { id: "u1".to_string(), name: "Emma Wilson".to_string() };
        let column: Column<User> = Column::field("Name", "name");
        assert_eq!(column.cell(&user), "Emma Wilson");

        let missing: Column<User> = Column::field("Nope", "nope");
        assert_eq!(missing.cell(&user), "");
    }
}
