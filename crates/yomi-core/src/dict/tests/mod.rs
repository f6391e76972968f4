mod kanwa;
mod lexicon;
mod ordering;
