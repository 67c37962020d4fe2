use crate::*;
use std::time::Duration;

pub fn handle_runtime_commands(cli: &Cli, cfg: &CampusConfig) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Issue {
            student_id,
            lat,
            lon,
            at,
        } => {
            if student_id.trim().is_empty() {
                anyhow::bail!("student id must not be empty");
            }
            let coordinate = Coordinate::new(*lat, *lon);
            if !coordinate.is_finite() {
                anyhow::bail!("coordinate must be finite: {}, {}", lat, lon);
            }
            let token = AttendanceToken {
                student_id: student_id.clone(),
                issued_at_ms: at.unwrap_or_else(now_ms),
                coordinate,
            };
            let issued = IssuedToken {
                token: encode_token(&token)?,
                student_id: token.student_id,
                issued_at_ms: token.issued_at_ms,
                coordinate: token.coordinate,
            };
            tracing::debug!(student = %issued.student_id, issued_at_ms = issued.issued_at_ms, "issued attendance token");
            print_one(cli.json, true, issued, |t| vec![t.token.clone()])?;
        }
        Commands::Decode { token } => {
            let decoded = decode_token(token)?;
            print_one(cli.json, true, decoded, |t| {
                vec![
                    format!("student_id: {}", t.student_id),
                    format!("issued_at_ms: {}", t.issued_at_ms),
                    format!(
                        "location: {}, {}",
                        t.coordinate.latitude, t.coordinate.longitude
                    ),
                ]
            })?;
        }
        Commands::Verify {
            token,
            now,
            window_secs,
            record,
            subject,
            date,
        } => {
            let subject = match (record, subject) {
                (true, None) => anyhow::bail!("--record requires --subject"),
                (true, Some(s)) => Some(s.as_str()),
                (false, _) => None,
            };
            let now = now.unwrap_or_else(now_ms);
            let window = window_secs
                .map(Duration::from_secs)
                .unwrap_or(cfg.validity_window);
            let engine = cfg.engine();

            let (decoded, mut verdict) = verify_encoded(token, now, &engine, window);
            let mut recorded = None;
            if let (Some(subject), Some(t), true) = (subject, &decoded, verdict.is_verified) {
                let date = resolve_date(date.as_deref(), now)?;
                let mut state = load_state()?;
                let fingerprint = token_fingerprint(t);
                if consume_token(&mut state, &fingerprint, t, now, window) {
                    let entry = AttendanceRecord {
                        student_id: t.student_id.clone(),
                        date,
                        subject: subject.to_string(),
                        status: AttendanceStatus::Present,
                    };
                    let replaced = mark_attendance(&mut state, entry.clone());
                    audit(
                        "mark",
                        serde_json::json!({"student": entry.student_id, "subject": entry.subject, "date": entry.date, "status": entry.status, "replaced": replaced}),
                    );
                    recorded = Some(entry);
                } else {
                    verdict = VerificationVerdict::reject(
                        VerdictOutcome::AlreadyUsed,
                        "This QR code has already been used to mark attendance.",
                    );
                }
                save_state(&state)?;
            }

            let elapsed_ms = decoded.as_ref().map(|t| now.saturating_sub(t.issued_at_ms));
            let student_id = decoded.map(|t| t.student_id);
            tracing::info!(
                student = student_id.as_deref().unwrap_or("-"),
                outcome = verdict.outcome.as_str(),
                elapsed_ms = elapsed_ms.unwrap_or_default(),
                "attendance token checked"
            );
            audit(
                "verify",
                serde_json::json!({"student": student_id, "outcome": verdict.outcome, "elapsed_ms": elapsed_ms}),
            );

            let report = VerifyReport {
                verdict,
                student_id,
                elapsed_ms,
                recorded,
            };
            print_one(cli.json, report.verdict.is_verified, report, |r| {
                let status = if r.verdict.is_verified {
                    "verified".to_string()
                } else {
                    format!("rejected ({})", r.verdict.outcome.as_str())
                };
                let mut lines = vec![format!("{}\t{}", status, r.verdict.reason)];
                if let Some(rec) = &r.recorded {
                    lines.push(format!(
                        "marked {} present for {} on {}",
                        rec.student_id, rec.subject, rec.date
                    ));
                }
                lines
            })?;
        }
        Commands::Contains { lat, lon } => {
            let coordinate = Coordinate::new(*lat, *lon);
            let report = ContainsReport {
                coordinate,
                inside: cfg.engine().contains(coordinate),
            };
            print_one(cli.json, true, report, |r| {
                vec![if r.inside { "inside" } else { "outside" }.to_string()]
            })?;
        }
        _ => {}
    }
    Ok(())
}
