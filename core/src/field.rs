use crate::object::{EntityKind, ObjectBase, SchemaObject};

/// A table column, as far as indexes need to know about it
#[derive(Clone, Debug)]
pub struct Field {
    base: ObjectBase,
    name: String,
    data_type: String,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            base: ObjectBase::new(Self::KIND),
            name: name.into(),
            data_type: data_type.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn data_type(&self) -> &str {
        &self.data_type
    }
}

impl SchemaObject for Field {
    const KIND: EntityKind = EntityKind::Field;

    fn base(&self) -> &ObjectBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }
}
