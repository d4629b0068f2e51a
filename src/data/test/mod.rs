mod deck_guide;
