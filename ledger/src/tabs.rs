//! Table and section orchestration
//!
//! Opening a table either resumes the one active order on it or creates
//! a fresh pending order. Sections are claimed by a single staff member
//! at a time; a table inside someone else's section is refused with an
//! explicit error, never silently reassigned.

use tracing::{debug, info, warn};

use crate::auth;
use crate::error::LedgerError;
use shared::models::{Actor, Capability, SectionAllocation, Table};
use shared::order::Order;

/// How a table open resolved
#[derive(Debug, Clone)]
pub enum TableOpening {
    /// An active order already existed for the table
    Resumed(Order),
    /// No active order; a fresh pending one was created
    Created(Order),
}

impl TableOpening {
    pub fn order(&self) -> &Order {
        match self {
            TableOpening::Resumed(order) | TableOpening::Created(order) => order,
        }
    }
}

/// Open a table for the acting staff member.
///
/// Refuses when the table's section is allocated to someone else. At most
/// one active order exists per table; terminal orders on the table are
/// history and never resumed.
pub fn open_table(
    orders: &[Order],
    table: &Table,
    tenant_id: &str,
    allocations: &[SectionAllocation],
    ctx: &crate::orders::CommandContext<'_>,
) -> Result<TableOpening, LedgerError> {
    ensure_section_access(allocations, &table.section, ctx.actor)?;

    let active = orders
        .iter()
        .find(|o| o.is_active() && o.table_name.as_deref() == Some(table.name.as_str()));
    if let Some(existing) = active {
        debug!(table = %table.name, order_id = %existing.order_id, "resuming active order");
        return Ok(TableOpening::Resumed(existing.clone()));
    }

    let order = Order::new(
        tenant_id,
        table.name.clone(),
        Some(table.name.clone()),
        ctx.actor,
    );
    info!(table = %table.name, order_id = %order.order_id, opened_by = %ctx.actor.name, "table opened");
    Ok(TableOpening::Created(order))
}

/// Start a counter sale with no table attached
pub fn walk_in(tenant_id: &str, ctx: &crate::orders::CommandContext<'_>) -> Order {
    Order::new(tenant_id, "Walk-in", None, ctx.actor)
}

/// Claim a section for the acting staff member.
///
/// Re-claiming one's own section is a no-op; a section held by someone
/// else must be released out-of-band first.
pub fn claim_section(
    allocations: &[SectionAllocation],
    section: &str,
    ctx: &crate::orders::CommandContext<'_>,
) -> Result<Vec<SectionAllocation>, LedgerError> {
    auth::require(ctx.actor, Capability::ClaimSection)?;

    if let Some(held) = allocations.iter().find(|a| a.section == section) {
        if held.staff_id == ctx.actor.staff_id {
            return Ok(allocations.to_vec());
        }
        warn!(section, held_by = %held.staff_name, claimant = %ctx.actor.name, "section claim refused");
        return Err(LedgerError::AccessDenied(format!(
            "section {section} is allocated to {}",
            held.staff_name
        )));
    }

    let mut next = allocations.to_vec();
    next.push(SectionAllocation {
        section: section.to_string(),
        staff_id: ctx.actor.staff_id.clone(),
        staff_name: ctx.actor.name.clone(),
    });
    info!(section, claimed_by = %ctx.actor.name, "section claimed");
    Ok(next)
}

fn ensure_section_access(
    allocations: &[SectionAllocation],
    section: &str,
    actor: &Actor,
) -> Result<(), LedgerError> {
    if let Some(held) = allocations.iter().find(|a| a.section == section) {
        if held.staff_id != actor.staff_id {
            return Err(LedgerError::AccessDenied(format!(
                "table is in section {section}, allocated to {}",
                held.staff_name
            )));
        }
    }
    Ok(())
}
