//! The `FieldAgent` trait.

use ff_core::{AgentRef, Cell, SimEvent};

use crate::StepContext;

/// A mobile agent driven by the tick loop.
///
/// Implementors do all their work inside [`step`][Self::step]; the loop
/// only decides the order in which agents are called.
pub trait FieldAgent {
    fn agent_ref(&self) -> AgentRef;

    fn position(&self) -> Cell;

    /// Act once for the current tick.
    fn step(&mut self, ctx: &mut StepContext<'_>);

    /// Record where this agent stands as its step begins.
    fn log_position(&self, ctx: &mut StepContext<'_>) {
        ctx.log.push(SimEvent::Position {
            tick:  ctx.tick,
            agent: self.agent_ref(),
            cell:  self.position(),
        });
    }
}
