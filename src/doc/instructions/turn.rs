/*!
# `LEFT` `RIGHT` `RTURN`

## Purpose
Turn a quarter in place.

## Remarks
`RTURN` picks left or right at random. Headings are north, east, south
and west; north is toward larger `y`.

*/
