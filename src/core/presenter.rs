use crate::core::TodoItem;
use std::io::{self, Write};

pub fn render_item(item: &TodoItem) -> String {
    format!(
        "- ID: {}, Title: \"{}\", Status: {}",
        item.id,
        item.title,
        item.status()
    )
}

pub fn present(items: &[TodoItem], out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Processed Todo List:")?;

    if items.is_empty() {
        writeln!(out, "No data to display after processing.")?;
        return Ok(());
    }

    for item in items {
        writeln!(out, "{}", render_item(item))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, title: &str, completed: bool) -> TodoItem {
        TodoItem {
            id,
            title: title.to_string(),
            completed,
        }
    }

    #[test]
    fn test_render_item() {
        assert_eq!(
            render_item(&item(1, "Test todo 1", true)),
            "- ID: 1, Title: \"Test todo 1\", Status: Completed"
        );
        assert_eq!(
            render_item(&item(2, "Test todo 2", false)),
            "- ID: 2, Title: \"Test todo 2\", Status: Pending"
        );
    }

    #[test]
    fn test_present_items() {
        let mut out = Vec::new();
        present(&[item(1, "a", true), item(2, "b", false)], &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "\nProcessed Todo List:\n\
             - ID: 1, Title: \"a\", Status: Completed\n\
             - ID: 2, Title: \"b\", Status: Pending\n"
        );
    }

    #[test]
    fn test_present_nothing() {
        let mut out = Vec::new();
        present(&[], &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "\nProcessed Todo List:\nNo data to display after processing.\n"
        );
    }
}
