//! Record assembly: zipping the dataset's parallel sequences into [`Star`]s.

use crate::dataset::Dataset;
use crate::models::Star;

/// Build one [`Star`] per entry of `stars.colors`.
///
/// Missing or `null` entries in the other sequences become empty strings
/// (or no details). Entries past the end of `colors` are ignored.
pub fn assemble(dataset: &Dataset) -> Vec<Star> {
    let columns = &dataset.stars;

    columns
        .colors
        .iter()
        .enumerate()
        .map(|(i, &color)| Star {
            name: text_at(&columns.names, i),
            color,
            date: text_at(&columns.creation_update, i),
            user: text_at(&columns.users, i),
            details: columns.details.get(i).cloned().flatten(),
        })
        .collect()
}

fn text_at(column: &[Option<String>], index: usize) -> String {
    column
        .get(index)
        .and_then(|value| value.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::parse_dataset;

    #[test]
    fn test_assemble_full_row() {
        let dataset = parse_dataset(
            r#"{"stars": {
                "colors": [16746496],
                "names": ["Alpha"],
                "creation_update": ["2024-11-16T09:00:00Z"],
                "users": ["alice"],
                "details": [{"seed": "1", "time_played": "01:00:00", "mods": []}]
            }}"#,
        )
        .unwrap();

        let stars = assemble(&dataset);
        assert_eq!(stars.len(), 1);
        assert_eq!(stars[0].name, "Alpha");
        assert_eq!(stars[0].color, 0xFF8800);
        assert_eq!(stars[0].date, "2024-11-16T09:00:00Z");
        assert_eq!(stars[0].user, "alice");
        assert_eq!(stars[0].seed(), Some("1"));
    }

    #[test]
    fn test_assemble_defaults_gaps() {
        let dataset = parse_dataset(
            r#"{"stars": {
                "colors": [1, 2, 3],
                "names": ["a", null],
                "users": ["u"]
            }}"#,
        )
        .unwrap();

        let stars = assemble(&dataset);
        assert_eq!(stars.len(), 3);
        assert_eq!(stars[1].name, "");
        assert_eq!(stars[2].name, "");
        assert_eq!(stars[1].user, "");
        assert!(stars.iter().all(|s| s.date.is_empty()));
        assert!(stars.iter().all(|s| s.details.is_none()));
    }

    #[test]
    fn test_assemble_preserves_colors_by_index() {
        let dataset = parse_dataset(r#"{"stars": {"colors": [9, 0, 16777215, 42]}}"#).unwrap();
        let stars = assemble(&dataset);
        for (i, star) in stars.iter().enumerate() {
            assert_eq!(star.color, dataset.stars.colors[i]);
        }
    }

    #[test]
    fn test_assemble_ignores_longer_sequences() {
        let dataset =
            parse_dataset(r#"{"stars": {"colors": [1], "names": ["a", "b", "c"]}}"#).unwrap();
        let stars = assemble(&dataset);
        assert_eq!(stars.len(), 1);
        assert_eq!(stars[0].name, "a");
    }

    #[test]
    fn test_assemble_empty_dataset() {
        let stars = assemble(&Dataset::default());
        assert!(stars.is_empty());
    }
}
