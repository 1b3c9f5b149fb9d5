use crate::{
    component::{Component, ComponentChild},
    parser::ContentLine,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IcalAlarm {
    pub properties: Vec<ContentLine>,
}

impl From<Vec<ContentLine>> for IcalAlarm {
    fn from(properties: Vec<ContentLine>) -> Self {
        Self { properties }
    }
}

impl Component for IcalAlarm {
    const NAMES: &[&str] = &["VALARM"];

    fn children(&self) -> impl Iterator<Item = ComponentChild<'_>> {
        self.properties.iter().map(ComponentChild::Property)
    }
}
