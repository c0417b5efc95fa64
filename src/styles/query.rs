#[derive(Clone, Copy, Debug)]
pub struct StyleQuery<'a> {
    pub(crate) element: &'a str,
    pub(crate) id: Option<&'a str>,
}

impl<'a> StyleQuery<'a> {
    pub fn element(element: &'a str) -> Self {
        Self { element, id: None }
    }

    pub fn with_id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }
}
