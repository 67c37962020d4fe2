use crate::*;
use std::path::Path;

pub fn handle_boundary_commands(cli: &Cli, cfg: &CampusConfig) -> anyhow::Result<bool> {
    let Commands::Boundary { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        BoundaryCommands::Show => {
            let engine = cfg.engine();
            let boundary = engine.boundary();
            let report = BoundaryReport {
                source: cfg.source.to_string_lossy().to_string(),
                vertex_count: boundary.len(),
                malformed: boundary.is_malformed(),
                centroid: boundary.centroid(),
                vertices: boundary.vertices().to_vec(),
            };
            print_one(cli.json, !report.malformed, report, |r| {
                let mut lines = vec![format!(
                    "boundary: {} vertices{}",
                    r.vertex_count,
                    if r.malformed { " (malformed)" } else { "" }
                )];
                for v in &r.vertices {
                    lines.push(format!("{}\t{}", v.latitude, v.longitude));
                }
                lines
            })?;
        }
        BoundaryCommands::Validate => {
            if let Err(e) = cfg.boundary.validate() {
                audit(
                    "boundary_validate",
                    serde_json::json!({"ok": false, "error": e.to_string()}),
                );
                anyhow::bail!("{} ({})", e, cfg.source.display());
            }
            print_one(cli.json, true, "valid", |_| {
                vec![format!("boundary valid ({} vertices)", cfg.boundary.len())]
            })?;
        }
    }

    Ok(true)
}

pub fn handle_config_commands(cli: &Cli, path: &Path) -> anyhow::Result<bool> {
    let Commands::Config { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        ConfigCommands::Show => {
            let cfg = load_config(path)?;
            print_one(cli.json, true, cfg.report(), |r| {
                vec![
                    format!("source: {}", r.source),
                    format!("from_file: {}", r.from_file),
                    format!("validity_window_secs: {}", r.validity_window_secs),
                    format!("boundary_vertices: {}", r.boundary.len()),
                ]
            })?;
        }
        ConfigCommands::Init { force } => {
            write_default_config(path, *force)?;
            let written = path.to_string_lossy().to_string();
            audit("config_init", serde_json::json!({"path": written}));
            print_one(cli.json, true, written, |p| vec![format!("wrote {}", p)])?;
        }
    }

    Ok(true)
}

pub fn handle_attendance_commands(cli: &Cli) -> anyhow::Result<bool> {
    let Commands::Attendance { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        AttendanceCommands::Mark {
            student_id,
            subject,
            status,
            date,
        } => {
            let entry = AttendanceRecord {
                student_id: student_id.clone(),
                date: resolve_date(date.as_deref(), now_ms())?,
                subject: subject.clone(),
                status: *status,
            };
            let mut state = load_state()?;
            let replaced = mark_attendance(&mut state, entry.clone());
            save_state(&state)?;
            audit(
                "mark",
                serde_json::json!({"student": entry.student_id, "subject": entry.subject, "date": entry.date, "status": entry.status, "replaced": replaced}),
            );
            print_one(cli.json, true, entry, |e| {
                vec![format!(
                    "marked {} {} for {} on {}",
                    e.student_id,
                    format!("{:?}", e.status).to_lowercase(),
                    e.subject,
                    e.date
                )]
            })?;
        }
        AttendanceCommands::List { student } => {
            let state = load_state()?;
            let records = list_records(&state, student.as_deref());
            print_out(cli.json, &records, |r| {
                format!(
                    "{}\t{}\t{}\t{:?}",
                    r.date, r.student_id, r.subject, r.status
                )
            })?;
        }
        AttendanceCommands::Summary { student_id } => {
            let state = load_state()?;
            let summary = summarize(&state, student_id);
            print_one(cli.json, true, summary, |s| {
                vec![format!(
                    "{}\t{:.1}%\tpresent={} absent={} late={} total={}",
                    s.student_id, s.attendance_percentage, s.present, s.absent, s.late, s.total
                )]
            })?;
        }
    }

    Ok(true)
}
