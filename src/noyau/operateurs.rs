// src/noyau/operateurs.rs
//
// Table des opérateurs binaires (fixe, lecture seule).
// - + -     : précédence 1
// - * / %   : précédence 2
// - tous associatifs à gauche
// - % n'est PAS un modulo : a % b = (a / b) * 100 (“pourcentage de”)

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assoc {
    Gauche,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Divise,
    Pourcent,
}

pub struct Descripteur {
    pub symbole: char,
    pub precedence: u8,
    pub assoc: Assoc,
    pub appliquer: fn(f64, f64) -> f64,
}

fn plus(a: f64, b: f64) -> f64 {
    a + b
}

fn moins(a: f64, b: f64) -> f64 {
    a - b
}

fn fois(a: f64, b: f64) -> f64 {
    a * b
}

fn divise(a: f64, b: f64) -> f64 {
    a / b
}

fn pourcent(a: f64, b: f64) -> f64 {
    (a / b) * 100.0
}

/// Indexée par `Op as usize` : l'ordre doit suivre celui de l'enum.
static TABLE: [Descripteur; 5] = [
    Descripteur {
        symbole: '+',
        precedence: 1,
        assoc: Assoc::Gauche,
        appliquer: plus,
    },
    Descripteur {
        symbole: '-',
        precedence: 1,
        assoc: Assoc::Gauche,
        appliquer: moins,
    },
    Descripteur {
        symbole: '*',
        precedence: 2,
        assoc: Assoc::Gauche,
        appliquer: fois,
    },
    Descripteur {
        symbole: '/',
        precedence: 2,
        assoc: Assoc::Gauche,
        appliquer: divise,
    },
    Descripteur {
        symbole: '%',
        precedence: 2,
        assoc: Assoc::Gauche,
        appliquer: pourcent,
    },
];

impl Op {
    pub fn depuis_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Moins),
            '*' => Some(Op::Fois),
            '/' => Some(Op::Divise),
            '%' => Some(Op::Pourcent),
            _ => None,
        }
    }

    pub fn descripteur(self) -> &'static Descripteur {
        &TABLE[self as usize]
    }

    pub fn precedence(self) -> u8 {
        self.descripteur().precedence
    }

    pub fn assoc(self) -> Assoc {
        self.descripteur().assoc
    }

    pub fn symbole(self) -> char {
        self.descripteur().symbole
    }

    /// a `op` b (a = opérande gauche, b = opérande droite).
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        (self.descripteur().appliquer)(a, b)
    }
}
