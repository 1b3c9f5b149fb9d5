use crate::{
    component::{Component, ComponentChild, IcalAlarm},
    parser::ContentLine,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IcalEventChild {
    Property(ContentLine),
    Alarm(IcalAlarm),
}

/// A parsed VEVENT: its content lines and VALARM components in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IcalEvent {
    pub children: Vec<IcalEventChild>,
}

impl IcalEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the given property.
    #[inline]
    pub fn add_content_line(&mut self, property: ContentLine) {
        self.children.push(IcalEventChild::Property(property));
    }

    /// Add the given sub component.
    #[inline]
    pub fn add_sub_component(&mut self, alarm: IcalAlarm) {
        self.children.push(IcalEventChild::Alarm(alarm));
    }

    pub fn remove_property(&mut self, name: &str) {
        self.children
            .retain(|child| !matches!(child, IcalEventChild::Property(prop) if prop.name == name));
    }

    pub fn get_alarms(&self) -> impl Iterator<Item = &IcalAlarm> {
        self.children.iter().filter_map(|child| match child {
            IcalEventChild::Alarm(alarm) => Some(alarm),
            IcalEventChild::Property(_) => None,
        })
    }
}

impl From<Vec<ContentLine>> for IcalEvent {
    fn from(properties: Vec<ContentLine>) -> Self {
        Self {
            children: properties
                .into_iter()
                .map(IcalEventChild::Property)
                .collect(),
        }
    }
}

impl FromIterator<ContentLine> for IcalEvent {
    fn from_iter<T: IntoIterator<Item = ContentLine>>(iter: T) -> Self {
        Self {
            children: iter.into_iter().map(IcalEventChild::Property).collect(),
        }
    }
}

impl Component for IcalEvent {
    const NAMES: &[&str] = &["VEVENT"];

    fn children(&self) -> impl Iterator<Item = ComponentChild<'_>> {
        self.children.iter().map(|child| match child {
            IcalEventChild::Property(prop) => ComponentChild::Property(prop),
            IcalEventChild::Alarm(alarm) => ComponentChild::Component(alarm.get_comp_name()),
        })
    }
}
