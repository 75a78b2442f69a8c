use classic_crypto_rs::dispatch;

const PLAIN: &str = "WEAREDISCOVEREDFLEEATONCE";

fn main() {
    let setups: [(&str, Option<&str>); 11] = [
        ("caesar", None),
        ("shift", Some("7")),
        ("substitution", Some("QWERTYUIOPASDFGHJKLZXCVBNM")),
        ("vigenere", Some("LEMON")),
        ("playfair", Some("MONARCHY")),
        ("rail_fence", Some("3")),
        ("route", Some("5,5,spiral_cw")),
        ("columnar_transposition", Some("ZEBRAS")),
        ("polybius", None),
        ("pigpen", None),
        ("hill", Some("[[3,3],[2,5]]")),
    ];

    println!("==> Plain =\n{PLAIN}\n");

    for (method, key) in setups {
        match dispatch::encrypt(PLAIN, method, key) {
            Ok(ct) => {
                println!("==> {method}");
                println!("{ct}");
                match dispatch::decrypt(&ct, method, key) {
                    Ok(pt) if pt == PLAIN => println!("decrypt ok\n"),
                    Ok(pt) => println!("decrypt not ok\n{PLAIN}\n{pt}\n"),
                    Err(e) => println!("decrypt error: {e}\n"),
                }
            }
            Err(e) => {
                println!("==> {method}\nencrypt error: {e}\n");
            }
        }
    }
}
