use exact_cover::{solve, Options, Problem};

fn example() -> Vec<(char, Vec<u32>)> {
    vec![
        ('A', vec![1, 4, 7]),
        ('B', vec![1, 4]),
        ('C', vec![4, 5, 7]),
        ('D', vec![3, 5, 6]),
        ('E', vec![2, 3, 6, 7]),
        ('F', vec![2, 7]),
    ]
}

fn main() {
    // Basic usage
    let result = solve(1..=7, example(), &Options::new()).unwrap();
    println!("{:?}", result);
    // List([['B', 'D', 'F']])

    // An example with multiple solutions.
    let mut subsets = example();
    subsets.push(('G', vec![3, 5, 6]));
    let result = solve(1..=7, subsets.clone(), &Options::new()).unwrap();
    println!("{:?}", result);
    // List([['B', 'D', 'F'], ['B', 'F', 'G']])

    // No solution
    let no_six = example()
        .into_iter()
        .map(|(row, elements)| (row, elements.into_iter().filter(|&el| el != 6).collect::<Vec<_>>()));
    let result = solve(1..=7, no_six, &Options::new()).unwrap();
    println!("{:?}", result);
    // List([])

    // The universe as a string.
    let string_subsets = subsets.iter().map(|(row, elements)| {
        let digits = elements.iter().map(|&el| std::char::from_digit(el, 10).unwrap());
        (*row, digits.collect::<Vec<_>>())
    });
    let result = solve("1234567".chars(), string_subsets, &Options::new()).unwrap();
    println!("{:?}", result);
    // List([['B', 'D', 'F'], ['B', 'F', 'G']])

    // By default, the order of the results is not random.
    // Solving the problem again yields the same result.
    let problem = Problem::new(1..=7, subsets.clone()).unwrap();
    for _ in 0..2 {
        println!("{:?}", problem.solve_one());
    }
    // Some(['B', 'D', 'F'])
    // Some(['B', 'D', 'F'])

    // Use randomize to get a random solution from a problem with multiple solutions.
    let options = Options::new().limit(1).randomize(true);
    for _ in 0..10 {
        println!("{:?}", problem.solve_with(&options).unwrap());
    }

    // Use preseed to populate a partial solution.
    // This problem has four solutions.
    subsets.push(('H', vec![1, 4]));
    let with_h = Problem::new(1..=7, subsets).unwrap();
    for preseed in &[vec!['B'], vec!['D'], vec!['B', 'G']] {
        // What is the result when these are chosen?
        let result = with_h.solve_with(&Options::new().preseed(preseed.clone())).unwrap();
        println!("{:?}: {:?}", preseed, result);
    }
    // ['B']: List([['B', 'D', 'F'], ['B', 'F', 'G']])
    // ['D']: List([['B', 'D', 'F'], ['D', 'F', 'H']])
    // ['B', 'G']: List([['B', 'F', 'G']])

    // Only count the solutions.
    println!("{}", with_h.count_all());
    // 4
}
