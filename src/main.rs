use exact_cover::Sudoku;

// Prints randomly generated filled sudokus in the line format,
// as many as given by the first argument (default 10).
fn main() {
    let n_sudokus = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) => n,
            Err(err) => {
                eprintln!("invalid number of sudokus {:?}: {}", arg, err);
                std::process::exit(2);
            }
        },
        None => 10,
    };

    for _ in 0..n_sudokus {
        let sudoku = Sudoku::generate_filled();
        println!("{}", sudoku.to_str_line());
    }
}
