use chroma_life_engine::{
    Channel, Coordinate, Grid, Intensities, NeighborResolver, Rgb, TransitionEngine,
};

const DEFAULTS: Intensities = Intensities::new(2, 50, 2);

/// Small deterministic generator for test fixtures.
struct Fixture(u32);

impl Fixture {
    fn next(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }

    fn color(&mut self) -> Rgb {
        let v = self.next();
        Rgb::new(v as u8, (v >> 8) as u8, (v >> 16) as u8)
    }
}

fn random_grid(rows: u32, columns: u32, seed: u32) -> Grid {
    let mut grid = Grid::new(rows, columns).unwrap();
    let mut fx = Fixture(seed);
    for y in 0..rows as i32 {
        for x in 0..columns as i32 {
            if fx.next() % 3 == 0 {
                grid.seed(Coordinate::new(x, y), true, Some(fx.color())).unwrap();
            }
        }
    }
    grid
}

fn seed(grid: &mut Grid, x: i32, y: i32, color: Rgb) {
    grid.seed(Coordinate::new(x, y), true, Some(color)).unwrap();
}

/// Previous-generation view used to check a step from the outside.
struct Before {
    alive: Vec<bool>,
    colors: Vec<Option<Rgb>>,
}

impl Before {
    fn of(grid: &Grid) -> Self {
        Self {
            alive: grid.cells().map(|c| c.alive).collect(),
            colors: grid.colors().to_vec(),
        }
    }

    fn live_neighbor_colors(&self, grid: &Grid, at: Coordinate) -> Option<Vec<Rgb>> {
        let slots = NeighborResolver::resolve(grid, at);
        let mut colors = Vec::new();
        for slot in slots {
            let idx = slot?;
            if self.alive[idx] {
                colors.push(self.colors[idx].unwrap());
            }
        }
        Some(colors)
    }
}

#[test]
fn boundary_cells_are_dead_after_every_step() {
    let mut grid = Grid::new(9, 11).unwrap();
    let mut fx = Fixture(5);
    for y in 0..9 {
        for x in 0..11 {
            seed(&mut grid, x, y, fx.color());
        }
    }
    let mut engine = TransitionEngine::new(1);
    for _ in 0..3 {
        engine.step(&mut grid, DEFAULTS);
        for cell in grid.cells() {
            let c = cell.coord;
            if c.x == 0 || c.y == 0 || c.x == 10 || c.y == 8 {
                assert!(!cell.alive && cell.color.is_none(), "{:?} survived the edge", c);
            }
        }
    }
}

#[test]
fn interior_cells_follow_b3_s23_and_keep_colors() {
    for seed_value in [3u32, 17, 99, 4242] {
        let mut grid = random_grid(20, 24, seed_value);
        let before = Before::of(&grid);
        TransitionEngine::new(seed_value).step(&mut grid, DEFAULTS);

        for (idx, cell) in grid.cells().enumerate() {
            let Some(parents) = before.live_neighbor_colors(&grid, cell.coord) else {
                continue;
            };
            let expected_alive = match (before.alive[idx], parents.len()) {
                (false, 3) => true,
                (true, 2 | 3) => true,
                _ => false,
            };
            assert_eq!(cell.alive, expected_alive, "cell {:?}", cell.coord);
            assert_eq!(cell.alive, cell.color.is_some());
            if before.alive[idx] && cell.alive {
                assert_eq!(cell.color, before.colors[idx], "survivor recolored at {:?}", cell.coord);
            }
        }
    }
}

#[test]
fn births_respect_dominant_and_recessive_bounds() {
    let mut births = 0;
    for seed_value in [8u32, 21, 300] {
        let mut grid = random_grid(30, 30, seed_value);
        let before = Before::of(&grid);
        TransitionEngine::new(seed_value).step(&mut grid, DEFAULTS);

        for (idx, cell) in grid.cells().enumerate() {
            if before.alive[idx] || !cell.alive {
                continue;
            }
            births += 1;
            let parents = before.live_neighbor_colors(&grid, cell.coord).unwrap();
            let mut averages: Vec<(Channel, f64)> = Channel::ALL
                .iter()
                .map(|&ch| {
                    let sum: u32 = parents.iter().map(|p| p.channel(ch) as u32).sum();
                    (ch, sum as f64 / parents.len() as f64)
                })
                .collect();
            averages.sort_by(|a, b| a.1.total_cmp(&b.1));

            let child = cell.color.unwrap();
            let (rec_channel, rec_avg) = averages[0];
            let (dom_channel, dom_avg) = averages[2];
            assert!(child.channel(rec_channel) as f64 <= rec_avg);
            let dom = child.channel(dom_channel);
            assert!(dom == 255 || dom as f64 >= dom_avg.floor());
        }
    }
    assert!(births > 0);
}

#[test]
fn empty_grid_stays_empty() {
    let mut grid = Grid::new(12, 12).unwrap();
    let report = TransitionEngine::new(1).step(&mut grid, DEFAULTS);
    assert_eq!(grid.live_count(), 0);
    assert_eq!(report.live, 0);
    assert!(grid.cells().all(|c| c.color.is_none()));
}

#[test]
fn interior_block_is_stable_for_ten_generations() {
    for (size, origin) in [(5u32, 1i32), (6, 2)] {
        let mut grid = Grid::new(size, size).unwrap();
        let colors = [
            Rgb::new(250, 0, 0),
            Rgb::new(0, 250, 0),
            Rgb::new(0, 0, 250),
            Rgb::new(90, 90, 90),
        ];
        let block = [(origin, origin), (origin + 1, origin), (origin, origin + 1), (origin + 1, origin + 1)];
        for (&(x, y), &c) in block.iter().zip(colors.iter()) {
            seed(&mut grid, x, y, c);
        }

        let mut engine = TransitionEngine::new(7);
        for _ in 0..10 {
            engine.step(&mut grid, DEFAULTS);
            assert_eq!(grid.live_count(), 4);
            for (&(x, y), &c) in block.iter().zip(colors.iter()) {
                assert_eq!(grid.get(Coordinate::new(x, y)).unwrap().color, Some(c));
            }
        }
    }
}

#[test]
fn birth_inherits_ranked_primary_colors() {
    let mut grid = Grid::new(7, 7).unwrap();
    // (3, 3) sees exactly these three live cells
    seed(&mut grid, 2, 2, Rgb::new(200, 10, 10));
    seed(&mut grid, 4, 2, Rgb::new(10, 200, 10));
    seed(&mut grid, 3, 4, Rgb::new(10, 10, 200));

    TransitionEngine::new(1).step(&mut grid, Intensities::new(2, 0, 2));

    let born = grid.get(Coordinate::new(3, 3)).unwrap();
    assert!(born.alive);
    assert_eq!(born.color, Some(Rgb::new(71, 73, 75)));
}

#[test]
fn repeated_runs_agree() {
    let run = || {
        let mut grid = random_grid(40, 40, 11);
        let mut engine = TransitionEngine::new(31);
        for _ in 0..8 {
            engine.step(&mut grid, DEFAULTS);
        }
        grid.colors().to_vec()
    };
    assert_eq!(run(), run());
}
