// Row-major order, so the first path found is reproducible across runs.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1), // up-left
    (-1, 0),  // up
    (-1, 1),  // up-right
    (0, -1),  // left
    (0, 1),   // right
    (1, -1),  // down-left
    (1, 0),   // down
    (1, 1),   // down-right
];
