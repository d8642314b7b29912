use crate::Marshal;

/// Operations of [`Category::Text`](crate::Category::Text) values.
pub trait Text: Marshal {
    fn get(&self) -> &str;

    fn set(&mut self, value: &str);
}
