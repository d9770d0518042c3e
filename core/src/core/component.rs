/// Anything that advances by discrete time units (video chip, timer).
///
/// The scheduler charges whole instructions and then advances each
/// component by the instruction's cost, 4 T-cycles per M-cycle.
pub trait Component {
    /// Advance this component by `t_cycles` ticks of the 4.194304 MHz clock.
    fn step(&mut self, t_cycles: u32);
}
