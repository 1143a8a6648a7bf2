// src/numerics/types/spiral.rs
// Clockwise spiral traversal over a Matrix.

use super::matrix::Matrix;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Leg {
    Top,
    Right,
    Bottom,
    Left,
}

/// Iterator yielding matrix cells in clockwise spiral order, starting at the
/// top-left corner and moving inward one layer at a time.
///
/// Keeps four shrinking boundaries. After the top row the bottom row is only
/// walked while `top <= bottom`, and after the right column the left column
/// only while `left <= right`, so single row and single column layers are
/// never visited twice.
#[derive(Clone, Debug)]
pub struct Spiral<'a> {
    matrix: &'a Matrix,
    // Signed so `bottom`/`right` may step below zero on the last layer.
    top: isize,
    bottom: isize,
    left: isize,
    right: isize,
    leg: Leg,
    cursor: isize,
    remaining: usize,
}

impl<'a> Spiral<'a> {
    pub(crate) fn new(matrix: &'a Matrix) -> Self {
        Self {
            matrix,
            top: 0,
            bottom: matrix.rows() as isize - 1,
            left: 0,
            right: matrix.cols() as isize - 1,
            leg: Leg::Top,
            cursor: 0,
            remaining: matrix.rows() * matrix.cols(),
        }
    }

    fn cell(&self, row: isize, col: isize) -> i32 {
        self.matrix.data()[row as usize * self.matrix.cols() + col as usize]
    }

    /// Move to the next non-skipped leg, setting the cursor to its start.
    /// Returns false once the boundaries have crossed.
    fn advance_leg(&mut self) -> bool {
        match self.leg {
            Leg::Top => {
                self.top += 1;
                self.leg = Leg::Right;
                self.cursor = self.top;
                return true;
            }
            Leg::Right => {
                self.right -= 1;
                if self.top <= self.bottom {
                    self.leg = Leg::Bottom;
                    self.cursor = self.right;
                    return true;
                }
                if self.enter_left_leg() {
                    return true;
                }
            }
            Leg::Bottom => {
                self.bottom -= 1;
                if self.enter_left_leg() {
                    return true;
                }
            }
            Leg::Left => {
                self.left += 1;
            }
        }

        if self.top <= self.bottom && self.left <= self.right {
            self.leg = Leg::Top;
            self.cursor = self.left;
            true
        } else {
            false
        }
    }

    fn enter_left_leg(&mut self) -> bool {
        if self.left <= self.right {
            self.leg = Leg::Left;
            self.cursor = self.bottom;
            true
        } else {
            false
        }
    }
}

impl Iterator for Spiral<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        while self.remaining > 0 {
            let value = match self.leg {
                Leg::Top if self.cursor <= self.right => {
                    let v = self.cell(self.top, self.cursor);
                    self.cursor += 1;
                    Some(v)
                }
                Leg::Right if self.cursor <= self.bottom => {
                    let v = self.cell(self.cursor, self.right);
                    self.cursor += 1;
                    Some(v)
                }
                Leg::Bottom if self.cursor >= self.left => {
                    let v = self.cell(self.bottom, self.cursor);
                    self.cursor -= 1;
                    Some(v)
                }
                Leg::Left if self.cursor >= self.top => {
                    let v = self.cell(self.cursor, self.left);
                    self.cursor -= 1;
                    Some(v)
                }
                _ => None,
            };

            match value {
                Some(v) => {
                    self.remaining -= 1;
                    return Some(v);
                }
                None => {
                    if !self.advance_leg() {
                        self.remaining = 0;
                    }
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Spiral<'_> {}
