pub mod word_list;
