pub mod ical;
pub use ical::*;

use crate::parser::ContentLine;

/// A child node of a parsed component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentChild<'c> {
    Property(&'c ContentLine),
    /// A nested component, e.g. a VALARM inside a VEVENT.
    Component(&'static str),
}

impl<'c> ComponentChild<'c> {
    #[inline]
    pub fn as_property(&self) -> Option<&'c ContentLine> {
        match self {
            Self::Property(prop) => Some(prop),
            Self::Component(_) => None,
        }
    }
}

/// Read access to a component handed over by a grammar parser.
///
/// Children are yielded in source order, properties and sub-components interleaved.
pub trait Component {
    const NAMES: &[&str];

    fn get_comp_name(&self) -> &'static str {
        assert_eq!(
            Self::NAMES.len(),
            1,
            "Default implementation only applicable for fixed component name"
        );
        Self::NAMES[0]
    }

    fn children(&self) -> impl Iterator<Item = ComponentChild<'_>>;

    fn get_properties(&self) -> impl Iterator<Item = &ContentLine> {
        self.children().filter_map(|child| child.as_property())
    }

    fn get_property<'c>(&'c self, name: &str) -> Option<&'c ContentLine> {
        self.get_properties().find(|p| p.name == name)
    }

    fn get_named_properties<'c>(&'c self, name: &'c str) -> impl Iterator<Item = &'c ContentLine> {
        self.get_properties().filter(move |p| p.name == name)
    }
}
