//! Structural paths
//!
//! A [`Path`] is a stack-allocated linked list built while walking a
//! document. Nothing is rendered until an error or warning needs the text,
//! e.g. `Bundle.entry[3].resource.valueQuantity.value`.

use std::fmt;

#[derive(Debug, Clone, Copy)]
enum Segment<'a> {
    Root(&'a str),
    Field(&'a str),
    /// A choice group, rendered as `name[x]`.
    Choice(&'a str),
    Index(usize),
}

#[derive(Debug, Clone, Copy)]
pub struct Path<'a> {
    parent: Option<&'a Path<'a>>,
    segment: Segment<'a>,
}

impl<'a> Path<'a> {
    pub fn root(name: &'a str) -> Self {
        Self {
            parent: None,
            segment: Segment::Root(name),
        }
    }

    pub fn field<'b>(&'b self, name: &'b str) -> Path<'b> {
        Path {
            parent: Some(self),
            segment: Segment::Field(name),
        }
    }

    pub fn choice<'b>(&'b self, name: &'b str) -> Path<'b> {
        Path {
            parent: Some(self),
            segment: Segment::Choice(name),
        }
    }

    pub fn index(&self, index: usize) -> Path<'_> {
        Path {
            parent: Some(self),
            segment: Segment::Index(index),
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut segments = Vec::new();
        let mut current = Some(self);
        while let Some(path) = current {
            segments.push(path.segment);
            current = path.parent;
        }
        for segment in segments.iter().rev() {
            match segment {
                Segment::Root(name) => f.write_str(name)?,
                Segment::Field(name) => write!(f, ".{name}")?,
                Segment::Choice(name) => write!(f, ".{name}[x]")?,
                Segment::Index(i) => write!(f, "[{i}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fields_and_indexes() {
        let root = Path::root("Bundle");
        let entry = root.field("entry");
        let third = entry.index(3);
        let resource = third.field("resource");
        let quantity = resource.field("valueQuantity");
        let value = quantity.field("value");
        assert_eq!(value.render(), "Bundle.entry[3].resource.valueQuantity.value");
    }

    #[test]
    fn renders_choice_groups() {
        let root = Path::root("Observation");
        assert_eq!(root.choice("value").to_string(), "Observation.value[x]");
        assert_eq!(root.to_string(), "Observation");
    }
}
