//! Parent assignment with a level stack.

use crate::types::RawSection;

/// Fill in the parent fields of every section, in place.
///
/// Before a section is pushed, every stack entry at the same or a deeper
/// level is popped; whatever remains on top is its parent. The stack only
/// ever holds the active ancestor chain.
pub fn assign_parents(sections: &mut [RawSection]) {
    let mut stack: Vec<usize> = Vec::new();

    for i in 0..sections.len() {
        let level = sections[i].level;

        while stack.last().is_some_and(|&top| sections[top].level >= level) {
            stack.pop();
        }

        let parent = stack.last().map(|&top| {
            let parent = &sections[top];
            (
                parent.reference().to_string(),
                parent.title.clone(),
                parent.chunk_type,
            )
        });

        let section = &mut sections[i];
        match parent {
            Some((reference, title, chunk_type)) => {
                section.parent_section = Some(reference);
                section.parent_title = Some(title);
                section.parent_type = Some(chunk_type);
            }
            None => {
                section.parent_section = None;
                section.parent_title = None;
                section.parent_type = None;
            }
        }

        stack.push(i);
    }
}
