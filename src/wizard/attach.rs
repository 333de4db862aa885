//! Floating IP and volume sub-flows
//!
//! Both sub-flows run the same small state machine:
//!
//! ```text
//! AskWhetherToAssign --no--> Done
//!         |yes
//!         v
//! ChooseCreateOrExisting --create--> (create resource) --> Done | AskWhetherToAssign
//!         |existing
//!         v
//! ChooseExisting --none in region--> AskWhetherToAssign
//!         |picked
//!         v
//!       Done | AskWhetherToAssign
//! ```
//!
//! A floating IP sub-flow ends after one address is obtained; the volume
//! sub-flow returns to `AskWhetherToAssign` after every attached volume.

use yansi::Paint;

use crate::api::CloudProvider;
use crate::catalog;
use crate::config::DEFAULT_VOLUME_SIZE_GIB;
use crate::error::AppError;
use crate::prompt::Prompter;

pub const ASSIGN_FLOATING_IP_PROMPT: &str = "Do you want to assign a floating IP address?";
pub const ATTACH_VOLUME_PROMPT: &str = "Do you want to assign more external volumes?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachState {
    AskWhetherToAssign,
    ChooseCreateOrExisting,
    ChooseExisting,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Create,
    Existing,
}

/// Ask whether to create a new resource or reuse one; create is the default.
fn choose_source<Q: Prompter>(prompter: &mut Q, kind: &str, region: &str) -> Result<Source, AppError> {
    let options = vec![
        format!("Create a new {} in the {} region", kind, region),
        format!("Use an existing {} in the {} region", kind, region),
    ];
    let message = format!("Do you want to create a new {} or use an existing one?", kind);
    match prompter.select(&message, &options, 0)? {
        0 => Ok(Source::Create),
        _ => Ok(Source::Existing),
    }
}

/// Run the floating IP sub-flow. Returns the chosen display label or the
/// address of a freshly created IP, or an empty string when the operator
/// declines.
pub async fn assign_floating_ip<P, Q>(provider: &P, prompter: &mut Q, region: &str) -> Result<String, AppError>
where
    P: CloudProvider,
    Q: Prompter,
{
    let mut selection = String::new();
    let mut state = AttachState::AskWhetherToAssign;
    while state != AttachState::Done {
        state = match state {
            AttachState::AskWhetherToAssign => {
                if prompter.confirm(ASSIGN_FLOATING_IP_PROMPT, true)? {
                    AttachState::ChooseCreateOrExisting
                } else {
                    AttachState::Done
                }
            }
            AttachState::ChooseCreateOrExisting => match choose_source(prompter, "Floating IP", region)? {
                Source::Create => {
                    println!("Requesting Floating IP address ...");
                    let ip = provider.create_floating_ip(region).await?;
                    println!(
                        "{} ({}) : {}",
                        Paint::new("Created Floating IP address").green(),
                        region,
                        Paint::new(&ip.ip).cyan()
                    );
                    selection = ip.ip;
                    AttachState::Done
                }
                Source::Existing => AttachState::ChooseExisting,
            },
            AttachState::ChooseExisting => {
                let existing = catalog::unassigned_floating_ips(provider, region).await?;
                if existing.is_empty() {
                    println!(
                        "{}",
                        Paint::new(format!("No existing floating IPs are available in the {} region", region)).yellow()
                    );
                    AttachState::AskWhetherToAssign
                } else {
                    let idx = prompter.select("Choose an existing Floating IP address", existing.labels(), 0)?;
                    selection = pick(existing.labels(), idx)?.to_string();
                    AttachState::Done
                }
            }
            AttachState::Done => AttachState::Done,
        };
    }
    Ok(selection)
}

/// Run the volume sub-flow, returning the IDs of every volume to attach in
/// the order they were chosen.
pub async fn attach_volumes<P, Q>(provider: &P, prompter: &mut Q, region: &str) -> Result<Vec<String>, AppError>
where
    P: CloudProvider,
    Q: Prompter,
{
    let mut volume_ids = Vec::new();
    let mut state = AttachState::AskWhetherToAssign;
    while state != AttachState::Done {
        state = match state {
            AttachState::AskWhetherToAssign => {
                if prompter.confirm(ATTACH_VOLUME_PROMPT, false)? {
                    AttachState::ChooseCreateOrExisting
                } else {
                    AttachState::Done
                }
            }
            AttachState::ChooseCreateOrExisting => match choose_source(prompter, "volume", region)? {
                Source::Create => {
                    let name = prompter.input_text("Enter the name for the new volume")?;
                    if name.trim().is_empty() {
                        return Err(AppError::Validation("Volume name is required".into()));
                    }
                    let size = prompter.input_number("Enter the size for the new volume (in GiB)", DEFAULT_VOLUME_SIZE_GIB)?;
                    if size == 0 {
                        return Err(AppError::Validation("Volume size must be at least 1 GiB".into()));
                    }
                    println!("Creating volume : {} ...", name);
                    let volume = provider.create_volume(region, name.trim(), size).await?;
                    println!(
                        "{} ({}) : {} id={}",
                        Paint::new("Created Volume").green(),
                        region,
                        volume.name,
                        Paint::new(&volume.id).cyan()
                    );
                    volume_ids.push(volume.id);
                    AttachState::AskWhetherToAssign
                }
                Source::Existing => AttachState::ChooseExisting,
            },
            AttachState::ChooseExisting => {
                let existing = catalog::unattached_volumes(provider, region).await?;
                if existing.is_empty() {
                    println!(
                        "{}",
                        Paint::new(format!("No existing unattached volumes are available in the {} region", region)).yellow()
                    );
                } else {
                    let idx = prompter.select("Choose an existing/unattached volume", existing.labels(), 0)?;
                    let label = pick(existing.labels(), idx)?;
                    if let Some(volume) = existing.get(label) {
                        volume_ids.push(volume.id.clone());
                    }
                }
                AttachState::AskWhetherToAssign
            }
            AttachState::Done => AttachState::Done,
        };
    }
    Ok(volume_ids)
}

/// Resolve a prompt answer back to its label.
pub(crate) fn pick(labels: &[String], idx: usize) -> Result<&str, AppError> {
    labels
        .get(idx)
        .map(String::as_str)
        .ok_or_else(|| AppError::Validation(format!("Selection {} is out of range", idx)))
}
