use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::types::from_flat_index;
use crate::*;

/// Every cell of one game, addressed by `(row, column)` in a row-major grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    size: Coord2,
    mine_count: CellCount,
}

impl Board {
    /// Blank board: no mines, nothing revealed or flagged.
    pub fn generate(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
            size,
            mine_count: 0,
        }
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_revealed).count() as CellCount
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size.0 && coords.1 < self.size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds(coords))
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        let coords = self.validate_coords(coords).ok()?;
        Some(&self.cells[coords.to_nd_index()])
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size;
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.coords().map(|coords| (coords, &self.cells[coords.to_nd_index()]))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// Marks `mine_count` distinct cells, chosen uniformly at random, as mines.
    ///
    /// Cell indices are partially Fisher-Yates shuffled and the shuffled prefix becomes the mine
    /// set, so every subset of the requested size is equally likely. Mines from an earlier
    /// placement are cleared first.
    pub fn place_mines<R: Rng + ?Sized>(&mut self, mine_count: CellCount, rng: &mut R) -> Result<()> {
        let capacity = self.total_cells();
        if mine_count > capacity {
            return Err(ConfigError::TooManyMines {
                requested: mine_count,
                capacity,
            }
            .into());
        }

        let mut indices: Vec<usize> = (0..usize::from(capacity)).collect();
        let (chosen, _) = indices.partial_shuffle(rng, usize::from(mine_count));

        self.clear_mines();
        for &index in chosen.iter() {
            let coords = from_flat_index(index, self.size);
            self.cells[coords.to_nd_index()].is_mine = true;
        }
        self.mine_count = mine_count;

        log::debug!("Placed {} mines on a {:?} board", mine_count, self.size);
        Ok(())
    }

    /// Marks exactly the given coordinates as mines, replacing any earlier placement.
    ///
    /// The board is left untouched when a coordinate is out of bounds or repeated.
    pub fn place_mines_at(&mut self, mine_coords: &[Coord2]) -> Result<()> {
        let mut mine_mask: Array2<bool> = Array2::default(self.size.to_nd_index());

        for &coords in mine_coords {
            let coords = self.validate_coords(coords)?;
            let slot = &mut mine_mask[coords.to_nd_index()];
            if *slot {
                return Err(ConfigError::DuplicateMine(coords).into());
            }
            *slot = true;
        }

        for (cell, &is_mine) in self.cells.iter_mut().zip(mine_mask.iter()) {
            cell.is_mine = is_mine;
        }
        self.mine_count = mine_coords.len() as CellCount;
        Ok(())
    }

    fn clear_mines(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.is_mine = false;
        }
        self.mine_count = 0;
    }

    /// Stores the number of neighbouring mines in every cell.
    pub fn compute_adjacency(&mut self) {
        for coords in self.coords() {
            let count = self.count_adjacent_mines(coords);
            self.cells[coords.to_nd_index()].adjacent_mines = count;
        }
    }

    fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        // at most 8 neighbours
        self.iter_neighbors(coords)
            .filter(|&pos| self.cells[pos.to_nd_index()].is_mine)
            .count() as u8
    }

    /// Reveals a cell and, when it is blank, the connected blank region around it together with
    /// its numbered border. Returns how many cells were newly revealed.
    ///
    /// Out of bounds, revealed, and flagged targets are ignored. A mine is revealed on its own and
    /// never starts a cascade; the cascade never opens mines or flagged cells either.
    pub fn reveal(&mut self, coords: Coord2) -> CellCount {
        let Ok(coords) = self.validate_coords(coords) else {
            return 0;
        };

        let cell = &mut self.cells[coords.to_nd_index()];
        if !cell.is_revealable() {
            return 0;
        }
        cell.is_revealed = true;

        if cell.is_mine {
            log::trace!("Revealed mine at {:?}", coords);
            return 1;
        }

        let adjacent_mines = cell.adjacent_mines;
        log::trace!("Revealed cell at {:?}, adjacent mines: {}", coords, adjacent_mines);
        if adjacent_mines > 0 {
            return 1;
        }

        let mut revealed: CellCount = 1;
        let mut visited: Array2<bool> = Array2::default(self.size.to_nd_index());
        visited[coords.to_nd_index()] = true;
        let mut to_visit = VecDeque::new();
        self.queue_unvisited_neighbors(coords, &mut visited, &mut to_visit);

        while let Some(visit_coords) = to_visit.pop_front() {
            let cell = &mut self.cells[visit_coords.to_nd_index()];
            if cell.is_mine || !cell.is_revealable() {
                log::trace!("Skipping cell at {:?}", visit_coords);
                continue;
            }

            cell.is_revealed = true;
            revealed += 1;

            let visit_adjacent_mines = cell.adjacent_mines;
            log::trace!(
                "Flood revealed cell at {:?}, adjacent mines: {}",
                visit_coords,
                visit_adjacent_mines
            );

            if visit_adjacent_mines == 0 {
                self.queue_unvisited_neighbors(visit_coords, &mut visited, &mut to_visit);
            }
        }

        revealed
    }

    fn queue_unvisited_neighbors(
        &self,
        coords: Coord2,
        visited: &mut Array2<bool>,
        to_visit: &mut VecDeque<Coord2>,
    ) {
        for pos in self.iter_neighbors(coords) {
            let seen = &mut visited[pos.to_nd_index()];
            if !*seen {
                *seen = true;
                to_visit.push_back(pos);
            }
        }
    }

    /// Reveals every mine, flagged or not. Returns how many were newly revealed.
    pub fn reveal_all_mines(&mut self) -> CellCount {
        let mut revealed = 0;
        for cell in self.cells.iter_mut().filter(|cell| cell.is_mine) {
            if !cell.is_revealed {
                cell.is_revealed = true;
                revealed += 1;
            }
        }
        revealed
    }

    /// Every safe cell is revealed and every mine is still hidden.
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_settled())
    }

    pub(crate) fn set_flagged(&mut self, coords: Coord2, flagged: bool) {
        self.cells[coords.to_nd_index()].is_flagged = flagged;
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}
