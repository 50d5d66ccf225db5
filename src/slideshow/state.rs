#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,  // Incoming slide enters from the right
    Backward, // Incoming slide enters from the left
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionState {
    Displaying { elapsed: f32 },                                       // Current slide at rest, autoplay timer running
    Transitioning { from: usize, direction: Direction, elapsed: f32 }, // Pushing `from` out for the current slide
}
