use crate::Marshal;

/// Static description of a record type: its name and its field names
/// in declaration order.
///
/// Built once per type by [`marshal_record!`](crate::marshal_record)
/// and shared by every instance.
#[derive(Debug)]
pub struct RecordSchema {
    pub type_name: &'static str,
    pub field_names: &'static [&'static str],
}

impl RecordSchema {
    pub fn field_len(&self) -> usize {
        self.field_names.len()
    }

    /// Declaration-order position of `name`, if it is a field.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_names.iter().position(|field| *field == name)
    }
}

/// Operations of [`Category::Record`](crate::Category::Record) values.
pub trait Record: Marshal {
    fn schema(&self) -> &'static RecordSchema;

    /// The field called `name`, or `None` for an unknown name.
    fn field(&self, name: &str) -> Option<&dyn Marshal>;

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Marshal>;
}
