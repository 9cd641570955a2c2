use anyhow::Result;
use std::io::Write;

use crate::catalog::{self, OWNER, PROJECTS, Project};

/// List the projects in the catalog
pub fn projects() -> Result<()> {
    let mut stdout = std::io::stdout();
    write_projects(catalog::default_project(), &mut stdout)
}

/// One line per project, `current` marked with `*`.
pub(crate) fn write_projects<W: Write>(current: &Project, out: &mut W) -> Result<()> {
    let width = PROJECTS.iter().map(|p| p.id.len()).max().unwrap_or(0);
    for project in PROJECTS {
        let marker = if project.id == current.id { '*' } else { ' ' };
        writeln!(
            out,
            "{} {:<width$}  {} ({}/{})",
            marker,
            project.id,
            project.name,
            OWNER,
            project.repo,
            width = width
        )?;
        writeln!(out, "  {:<width$}  {}", "", project.description, width = width)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_projects_marks_current() {
        let mut out = Vec::new();
        write_projects(catalog::default_project(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "* farmoxel    Within Reach (FaR-Team/Project-FaR)"
        );
        assert_eq!(
            lines[2],
            "  roommakers  Room Makers (FaR-Team/RoomMakers-Android)"
        );
        assert!(lines[3].ends_with("interactive builder."));
    }

    #[test]
    fn test_write_projects_other_current() {
        let mut out = Vec::new();
        write_projects(catalog::find("roommakers").unwrap(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("  farmoxel"));
        assert!(text.contains("* roommakers"));
    }
}
